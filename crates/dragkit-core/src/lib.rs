//! Pointer drag tracking for Dragkit
//!
//! Turns raw mouse and single-touch events into a sequence of
//! [`DragGesture`] samples (position, direction, distance, velocity) and
//! delivers them to observers as `dragstart`, at most one `drag` per
//! rendering frame, and `dragend`.
//!
//! The environment is abstracted behind [`DragHost`]; see
//! `dragkit-platform-web` for the browser binding and `dragkit-testing` for a
//! headless host.

pub mod config;
pub mod gesture;
pub mod gesture_constants;
pub mod host;
pub mod input;
pub mod observers;
pub mod tracker;

pub use config::{ConfigError, TrackerConfig};
pub use gesture::{
    build_sample, direction, distance, velocity, velocity_with_min_interval, DragDirection,
    DragGesture, HorizontalDirection, SampleContext, VerticalDirection,
};
pub use host::{DragHost, FrameRequestId};
pub use input::{EventDisposition, PointerInput, PointerSource};
pub use observers::{DragEventKind, DragEventKindError, GestureObservers, ObserverId};
pub use tracker::GestureTracker;

pub use dragkit_geometry::{Rect, Size, Vector};

pub mod prelude {
    pub use crate::gesture::{DragDirection, DragGesture, HorizontalDirection, VerticalDirection};
    pub use crate::host::DragHost;
    pub use crate::input::{EventDisposition, PointerInput};
    pub use crate::observers::DragEventKind;
    pub use crate::tracker::GestureTracker;
    pub use dragkit_geometry::prelude::*;
}

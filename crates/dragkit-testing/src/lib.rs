//! Testing utilities and harness for Dragkit

pub mod host;
pub mod recorder;
pub mod robot;

pub use host::TestHost;
pub use recorder::{GestureRecorder, RecordedEvent};
pub use robot::DragRobot;

pub mod prelude {
    pub use crate::host::TestHost;
    pub use crate::recorder::{GestureRecorder, RecordedEvent};
    pub use crate::robot::DragRobot;
}

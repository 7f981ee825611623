//! Host abstraction for the gesture tracker.
//!
//! The tracker never touches a DOM, a window or a clock directly. A host
//! adapts whatever environment it runs in: it answers geometry queries,
//! schedules frame callbacks, and binds or unbinds the native listeners that
//! feed pointer events back into the tracker.

use dragkit_geometry::{Rect, Size};

/// Opaque handle for a requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

pub trait DragHost {
    /// Current bounding rectangle of the surface, in page coordinates.
    fn surface_bounds(&self) -> Rect;

    /// Current viewport extent, used to normalize velocity.
    fn viewport_size(&self) -> Size;

    /// Requests a callback on the next rendering frame.
    ///
    /// When it fires, the host must call
    /// [`GestureTracker::on_frame`](crate::GestureTracker::on_frame) with the
    /// returned id.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancels a request made with [`request_frame`](Self::request_frame).
    /// Cancelling an id that already fired must be harmless.
    fn cancel_frame(&mut self, id: FrameRequestId);

    /// Binds the permanent pointer-down listeners on the surface.
    fn attach_surface_listeners(&mut self);

    fn detach_surface_listeners(&mut self);

    /// Binds move/up listeners on the global input surface for one drag.
    fn attach_global_listeners(&mut self);

    fn detach_global_listeners(&mut self);
}

//! Headless [`DragHost`] with inspectable state.
//!
//! Frame requests are queued instead of scheduled; tests decide when a
//! "frame" happens by draining the queue. Listener bookkeeping mirrors the
//! DOM: attaching twice is recorded, detaching an absent listener is a no-op.

use dragkit_core::{DragHost, FrameRequestId};
use dragkit_geometry::{Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct HostState {
    bounds: Rect,
    viewport: Size,
    next_frame: u64,
    pending_frames: Vec<FrameRequestId>,
    frames_requested: usize,
    frames_cancelled: usize,
    surface_listeners: usize,
    global_listeners: usize,
    global_attach_calls: usize,
}

/// Cloneable handle; every clone observes the same state.
#[derive(Clone, Debug, Default)]
pub struct TestHost {
    state: Rc<RefCell<HostState>>,
}

impl TestHost {
    pub fn new(bounds: Rect, viewport: Size) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                bounds,
                viewport,
                ..HostState::default()
            })),
        }
    }

    /// Moves or resizes the surface, e.g. to simulate a layout shift.
    pub fn set_bounds(&self, bounds: Rect) {
        self.state.borrow_mut().bounds = bounds;
    }

    pub fn set_viewport(&self, viewport: Size) {
        self.state.borrow_mut().viewport = viewport;
    }

    /// Frame requests that were neither cancelled nor fired.
    pub fn pending_frames(&self) -> Vec<FrameRequestId> {
        self.state.borrow().pending_frames.clone()
    }

    /// Removes and returns the pending requests, as a frame tick would.
    pub fn take_pending_frames(&self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.state.borrow_mut().pending_frames)
    }

    pub fn frames_requested(&self) -> usize {
        self.state.borrow().frames_requested
    }

    pub fn frames_cancelled(&self) -> usize {
        self.state.borrow().frames_cancelled
    }

    pub fn surface_listener_count(&self) -> usize {
        self.state.borrow().surface_listeners
    }

    pub fn global_listener_count(&self) -> usize {
        self.state.borrow().global_listeners
    }

    /// Number of times global listeners were bound, across all drags.
    pub fn global_attach_calls(&self) -> usize {
        self.state.borrow().global_attach_calls
    }

    pub fn has_listeners(&self) -> bool {
        let state = self.state.borrow();
        state.surface_listeners > 0 || state.global_listeners > 0
    }
}

impl DragHost for TestHost {
    fn surface_bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    fn viewport_size(&self) -> Size {
        self.state.borrow().viewport
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let mut state = self.state.borrow_mut();
        let id = FrameRequestId(state.next_frame);
        state.next_frame += 1;
        state.frames_requested += 1;
        state.pending_frames.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let mut state = self.state.borrow_mut();
        if let Some(index) = state.pending_frames.iter().position(|pending| *pending == id) {
            state.pending_frames.remove(index);
            state.frames_cancelled += 1;
        }
    }

    fn attach_surface_listeners(&mut self) {
        self.state.borrow_mut().surface_listeners += 1;
    }

    fn detach_surface_listeners(&mut self) {
        let mut state = self.state.borrow_mut();
        state.surface_listeners = state.surface_listeners.saturating_sub(1);
    }

    fn attach_global_listeners(&mut self) {
        let mut state = self.state.borrow_mut();
        state.global_listeners += 1;
        state.global_attach_calls += 1;
    }

    fn detach_global_listeners(&mut self) {
        let mut state = self.state.borrow_mut();
        state.global_listeners = state.global_listeners.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let host = TestHost::new(Rect::new(0.0, 0.0, 10.0, 10.0), Size::new(100.0, 100.0));
        let mut handle = host.clone();

        let first = handle.request_frame();
        let second = handle.request_frame();
        handle.cancel_frame(first);
        handle.cancel_frame(first);

        assert_eq!(host.pending_frames(), vec![second]);
        assert_eq!(host.frames_requested(), 2);
        assert_eq!(host.frames_cancelled(), 1);
    }

    #[test]
    fn detach_without_attach_is_harmless() {
        let mut host = TestHost::default();
        host.detach_global_listeners();
        host.detach_surface_listeners();
        assert!(!host.has_listeners());

        host.attach_surface_listeners();
        assert_eq!(host.surface_listener_count(), 1);
        host.set_bounds(Rect::new(5.0, 5.0, 1.0, 1.0));
        assert_eq!(host.surface_bounds().left, 5.0);
    }
}

//! Robot-style driver for gesture trackers
//!
//! Wraps a [`GestureTracker`] over a [`TestHost`] and exposes the
//! interactions a test needs: press, move, release, and frame ticks.
//!
//! # Example
//!
//! ```
//! use dragkit_core::DragEventKind;
//! use dragkit_geometry::{Rect, Size};
//! use dragkit_testing::DragRobot;
//!
//! let mut robot = DragRobot::new(
//!     Rect::new(10.0, 20.0, 100.0, 50.0),
//!     Size::new(1000.0, 800.0),
//! );
//! robot.press(50.0, 70.0, 0.0);
//! robot.move_to(60.0, 70.0, 20.0);
//! robot.advance_frame();
//! robot.release(25.0);
//!
//! assert_eq!(
//!     robot.recorder().kinds(),
//!     vec![DragEventKind::DragStart, DragEventKind::Drag, DragEventKind::DragEnd]
//! );
//! ```

use crate::host::TestHost;
use crate::recorder::GestureRecorder;
use dragkit_core::{EventDisposition, GestureTracker, PointerInput, TrackerConfig};
use dragkit_geometry::{Rect, Size};

pub struct DragRobot {
    tracker: GestureTracker<TestHost>,
    host: TestHost,
    recorder: GestureRecorder,
    last_position: (f32, f32),
}

impl DragRobot {
    /// Creates a tracker over a fresh host with a recorder already attached.
    pub fn new(bounds: Rect, viewport: Size) -> Self {
        Self::with_config(bounds, viewport, TrackerConfig::default())
    }

    pub fn with_config(bounds: Rect, viewport: Size, config: TrackerConfig) -> Self {
        let host = TestHost::new(bounds, viewport);
        let mut tracker = GestureTracker::with_config(host.clone(), config);
        let recorder = GestureRecorder::new();
        recorder.attach(&mut tracker);
        Self {
            tracker,
            host,
            recorder,
            last_position: (0.0, 0.0),
        }
    }

    pub fn tracker(&self) -> &GestureTracker<TestHost> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut GestureTracker<TestHost> {
        &mut self.tracker
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn recorder(&self) -> &GestureRecorder {
        &self.recorder
    }

    /// Mouse button down at page position `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32, time_ms: f64) -> EventDisposition {
        self.last_position = (x, y);
        self.tracker
            .handle_pointer_down(&PointerInput::mouse(x, y, time_ms))
    }

    /// Touch start with `contacts` simultaneous touches, the first at `(x, y)`.
    pub fn touch_start(&mut self, x: f32, y: f32, time_ms: f64, contacts: usize) -> EventDisposition {
        self.last_position = (x, y);
        self.tracker
            .handle_pointer_down(&PointerInput::touch(x, y, time_ms, contacts))
    }

    pub fn move_to(&mut self, x: f32, y: f32, time_ms: f64) -> EventDisposition {
        self.last_position = (x, y);
        self.tracker
            .handle_pointer_move(&PointerInput::mouse(x, y, time_ms))
    }

    pub fn touch_move(&mut self, x: f32, y: f32, time_ms: f64) -> EventDisposition {
        self.last_position = (x, y);
        self.tracker
            .handle_pointer_move(&PointerInput::touch(x, y, time_ms, 1))
    }

    /// Releases at the last known pointer position.
    pub fn release(&mut self, time_ms: f64) -> EventDisposition {
        let (x, y) = self.last_position;
        self.tracker
            .handle_pointer_up(&PointerInput::mouse(x, y, time_ms))
    }

    /// Fires every pending frame request, as one rendering frame would.
    ///
    /// Returns the number of callbacks delivered to the tracker.
    pub fn advance_frame(&mut self) -> usize {
        let frames = self.host.take_pending_frames();
        let fired = frames.len();
        for id in frames {
            self.tracker.on_frame(id);
        }
        fired
    }

    /// Runs a full press, move, frame, release sequence through `points`.
    ///
    /// Each point is `(x, y, time_ms)`; the first is the press position and
    /// the release happens at the last point's time.
    pub fn drag_through(&mut self, points: &[(f32, f32, f64)]) {
        let Some((&(x, y, t), rest)) = points.split_first() else {
            return;
        };
        let _ = self.press(x, y, t);
        let mut end = t;
        for &(x, y, t) in rest {
            let _ = self.move_to(x, y, t);
            self.advance_frame();
            end = t;
        }
        let _ = self.release(end);
    }

    pub fn destroy(&mut self) {
        self.tracker.destroy();
    }
}

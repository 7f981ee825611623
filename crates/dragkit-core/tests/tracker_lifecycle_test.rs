//! Drives a tracker through full drags on a headless host and checks the
//! notification stream, listener bookkeeping and frame coalescing.

use dragkit_core::{
    DragDirection, DragEventKind, EventDisposition, GestureTracker, HorizontalDirection,
    TrackerConfig, Vector,
};
use dragkit_geometry::{Rect, Size};
use dragkit_testing::{DragRobot, GestureRecorder, TestHost};
use std::cell::RefCell;
use std::rc::Rc;

const BOUNDS: Rect = Rect::new(10.0, 20.0, 100.0, 50.0);
const VIEWPORT: Size = Size::new(1000.0, 800.0);

fn robot() -> DragRobot {
    DragRobot::new(BOUNDS, VIEWPORT)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn worked_example_produces_start_drag_end() {
    let mut robot = robot();

    assert_eq!(robot.press(50.0, 70.0, 0.0), EventDisposition::PREVENT_DEFAULT);
    let start = robot.recorder().last().expect("dragstart recorded");
    assert_eq!(start.kind, DragEventKind::DragStart);
    assert_eq!(start.gesture.element_point(), Vector::new(40.0, 50.0));
    assert_eq!(start.gesture.window_point(), Vector::new(50.0, 70.0));
    assert_eq!(start.gesture.distance(), Vector::ZERO);
    assert_eq!(start.gesture.velocity(), Vector::ZERO);

    assert_eq!(
        robot.move_to(60.0, 70.0, 20.0),
        EventDisposition::PREVENT_DEFAULT
    );
    assert_eq!(robot.advance_frame(), 1);

    let drag = robot.recorder().last().expect("drag recorded");
    assert_eq!(drag.kind, DragEventKind::Drag);
    assert_eq!(
        drag.gesture.direction(),
        DragDirection {
            x: Some(HorizontalDirection::Right),
            y: None,
        }
    );
    assert_eq!(drag.gesture.distance(), Vector::new(10.0, 0.0));
    assert!(approx(drag.gesture.velocity().x, 0.05));

    assert_eq!(robot.release(25.0), EventDisposition::CONSUMED);
    let end = robot.recorder().last().expect("dragend recorded");
    assert_eq!(end.kind, DragEventKind::DragEnd);
    assert_eq!(end.gesture, drag.gesture);

    assert!(!robot.tracker().is_dragging());
    assert_eq!(robot.host().global_listener_count(), 0);
    assert_eq!(robot.host().surface_listener_count(), 1);
    assert_eq!(robot.advance_frame(), 0);
    assert_eq!(robot.recorder().len(), 3);
}

#[test]
fn moves_within_one_frame_coalesce_to_latest_sample() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);

    robot.move_to(60.0, 70.0, 20.0);
    robot.move_to(70.0, 70.0, 40.0);
    robot.move_to(80.0, 75.0, 60.0);

    assert_eq!(robot.host().pending_frames().len(), 1);
    assert_eq!(robot.host().frames_requested(), 3);
    assert_eq!(robot.host().frames_cancelled(), 2);

    assert_eq!(robot.advance_frame(), 1);
    let drags = robot.recorder().gestures_of(DragEventKind::Drag);
    assert_eq!(drags.len(), 1);
    assert_eq!(drags[0].window_point(), Vector::new(80.0, 75.0));
    assert_eq!(drags[0].distance(), Vector::new(30.0, 5.0));
}

#[test]
fn throttled_moves_still_arm_a_frame() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);

    robot.move_to(60.0, 70.0, 20.0);
    // 5ms later: below the throttle interval.
    robot.move_to(70.0, 70.0, 25.0);

    let last = robot.tracker().last_gesture().expect("active drag");
    assert_eq!(last.window_point(), Vector::new(60.0, 70.0));
    assert_eq!(last.timestamp(), 20.0);
    assert!(robot.tracker().has_pending_frame());

    robot.advance_frame();
    let drags = robot.recorder().gestures_of(DragEventKind::Drag);
    assert_eq!(drags[0].window_point(), Vector::new(60.0, 70.0));
}

#[test]
fn move_exactly_at_throttle_interval_does_not_advance() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);
    robot.move_to(90.0, 70.0, 16.0);

    let last = robot.tracker().last_gesture().expect("active drag");
    assert_eq!(last.window_point(), Vector::new(50.0, 70.0));

    robot.move_to(90.0, 70.0, 16.5);
    let last = robot.tracker().last_gesture().expect("active drag");
    assert_eq!(last.window_point(), Vector::new(90.0, 70.0));
}

#[test]
fn notifications_follow_start_drag_end_order() {
    let mut robot = robot();
    robot.drag_through(&[
        (50.0, 70.0, 0.0),
        (55.0, 70.0, 20.0),
        (60.0, 72.0, 40.0),
        (65.0, 74.0, 60.0),
    ]);

    let kinds = robot.recorder().kinds();
    assert_eq!(kinds.first(), Some(&DragEventKind::DragStart));
    assert_eq!(kinds.last(), Some(&DragEventKind::DragEnd));
    assert!(kinds[1..kinds.len() - 1]
        .iter()
        .all(|kind| *kind == DragEventKind::Drag));
    assert_eq!(kinds.len(), 5);

    assert_eq!(robot.move_to(70.0, 70.0, 80.0), EventDisposition::IGNORED);
    assert_eq!(robot.advance_frame(), 0);
    assert_eq!(robot.recorder().len(), 5);
}

#[test]
fn release_cancels_pending_frame() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);
    robot.move_to(60.0, 70.0, 20.0);
    let pending = robot.host().pending_frames();
    assert_eq!(pending.len(), 1);

    robot.release(25.0);
    assert!(robot.host().pending_frames().is_empty());
    assert_eq!(robot.host().frames_cancelled(), 1);

    // A browser that still delivers the old callback must not produce a drag.
    robot.tracker_mut().on_frame(pending[0]);
    assert_eq!(
        robot.recorder().kinds(),
        vec![DragEventKind::DragStart, DragEventKind::DragEnd]
    );
}

#[test]
fn first_samples_are_zeroed() {
    let mut robot = robot();
    robot.press(30.0, 40.0, 12.0);

    let tracker = robot.tracker();
    let first = tracker.first_gesture().expect("active drag");
    let last = tracker.last_gesture().expect("active drag");
    assert_eq!(first, last);
    assert_eq!(first.distance(), Vector::ZERO);
    assert_eq!(first.velocity(), Vector::ZERO);
    assert_eq!(first.direction(), DragDirection::NONE);
    assert_eq!(
        robot.recorder().gestures_of(DragEventKind::DragStart),
        vec![*first]
    );
}

#[test]
fn element_frame_is_frozen_for_the_whole_drag() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);

    robot.host().set_bounds(Rect::new(200.0, 300.0, 100.0, 50.0));
    robot.move_to(60.0, 70.0, 20.0);

    let last = robot.tracker().last_gesture().expect("active drag");
    assert_eq!(last.element_point(), Vector::new(50.0, 50.0));
    assert_eq!(robot.tracker().drag_bounds(), Some(BOUNDS));

    robot.release(30.0);
    robot.press(250.0, 310.0, 100.0);
    let start = robot.recorder().last().expect("second dragstart");
    assert_eq!(start.gesture.element_point(), Vector::new(50.0, 10.0));
}

#[test]
fn destroy_is_idempotent_and_removes_every_listener() {
    let mut robot = robot();
    assert_eq!(robot.host().surface_listener_count(), 1);

    robot.destroy();
    robot.destroy();

    assert!(robot.tracker().is_destroyed());
    assert!(!robot.host().has_listeners());
    assert_eq!(robot.press(50.0, 70.0, 0.0), EventDisposition::IGNORED);
    assert_eq!(robot.release(10.0), EventDisposition::IGNORED);
    assert!(robot.recorder().is_empty());
}

#[test]
fn destroy_mid_drag_cancels_pending_frame() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);
    robot.move_to(60.0, 70.0, 20.0);
    let pending = robot.host().pending_frames();
    assert_eq!(pending.len(), 1);

    robot.destroy();

    assert!(robot.host().pending_frames().is_empty());
    assert!(!robot.host().has_listeners());
    robot.tracker_mut().on_frame(pending[0]);
    assert_eq!(robot.recorder().kinds(), vec![DragEventKind::DragStart]);
}

#[test]
fn multi_touch_down_is_ignored() {
    let mut robot = robot();

    assert_eq!(
        robot.touch_start(50.0, 70.0, 0.0, 2),
        EventDisposition::IGNORED
    );
    assert!(!robot.tracker().is_dragging());
    assert!(robot.recorder().is_empty());
    assert_eq!(robot.host().global_attach_calls(), 0);

    assert_eq!(
        robot.touch_start(50.0, 70.0, 5.0, 1),
        EventDisposition::PREVENT_DEFAULT
    );
    assert!(robot.tracker().is_dragging());
}

#[test]
fn second_down_during_drag_is_ignored() {
    let mut robot = robot();
    robot.press(50.0, 70.0, 0.0);

    assert_eq!(robot.press(80.0, 90.0, 10.0), EventDisposition::IGNORED);
    assert_eq!(robot.host().global_attach_calls(), 1);
    assert_eq!(robot.host().global_listener_count(), 1);
    assert_eq!(
        robot.tracker().first_gesture().map(|g| g.window_point()),
        Some(Vector::new(50.0, 70.0))
    );
}

#[test]
fn input_without_active_drag_is_ignored() {
    let mut robot = robot();

    assert_eq!(robot.move_to(10.0, 10.0, 0.0), EventDisposition::IGNORED);
    assert_eq!(robot.release(5.0), EventDisposition::IGNORED);
    assert_eq!(robot.host().frames_requested(), 0);
    assert!(robot.recorder().is_empty());
}

#[test]
fn equal_timestamps_keep_velocity_finite() {
    let config = TrackerConfig::new().with_throttle_interval(0.0);
    let mut robot = DragRobot::with_config(BOUNDS, VIEWPORT, config);
    robot.press(50.0, 70.0, 10.0);
    robot.move_to(60.0, 70.0, 10.5);

    let last = robot.tracker().last_gesture().expect("active drag");
    assert!(last.velocity().is_finite());
    assert!(approx(last.velocity().x, 1.0));
}

#[test]
fn off_removes_a_single_observer() {
    let host = TestHost::new(BOUNDS, VIEWPORT);
    let mut tracker = GestureTracker::new(host);
    let hits = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let hits = Rc::clone(&hits);
        tracker.on(DragEventKind::DragStart, move |_| hits.borrow_mut().push("first"))
    };
    {
        let hits = Rc::clone(&hits);
        tracker.on(DragEventKind::DragStart, move |_| hits.borrow_mut().push("second"));
    }
    assert!(tracker.off(first));
    assert_eq!(tracker.observer_count(DragEventKind::DragStart), 1);

    let _ = tracker.handle_pointer_down(&dragkit_core::PointerInput::mouse(50.0, 70.0, 0.0));
    assert_eq!(*hits.borrow(), vec!["second"]);
}

#[test]
fn registration_after_destroy_is_ignored() {
    let mut robot = robot();
    robot.destroy();

    let recorder = GestureRecorder::new();
    let ids = recorder.attach(robot.tracker_mut());
    assert_eq!(robot.tracker().observer_count(DragEventKind::Drag), 0);
    assert!(!robot.tracker_mut().off(ids[1]));
}

#[test]
fn dropping_the_tracker_releases_listeners() {
    let host = TestHost::new(BOUNDS, VIEWPORT);
    {
        let mut tracker = GestureTracker::new(host.clone());
        let _ = tracker.handle_pointer_down(&dragkit_core::PointerInput::mouse(50.0, 70.0, 0.0));
        let _ = tracker.handle_pointer_move(&dragkit_core::PointerInput::mouse(60.0, 70.0, 20.0));
        assert!(host.has_listeners());
        assert_eq!(host.pending_frames().len(), 1);
    }
    assert!(!host.has_listeners());
    assert!(host.pending_frames().is_empty());
}

#[test]
fn invalid_config_is_rejected_before_binding() {
    let host = TestHost::new(BOUNDS, VIEWPORT);
    let config = TrackerConfig::new().with_min_velocity_interval(0.0);

    let result = GestureTracker::try_with_config(host.clone(), config);
    assert!(result.is_err());
    assert_eq!(host.surface_listener_count(), 0);
}

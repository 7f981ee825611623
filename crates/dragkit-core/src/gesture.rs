//! Drag samples and the kinematics derived from them.
//!
//! A [`DragGesture`] is one measured instant of a drag. Its direction,
//! distance and velocity are computed from neighbouring samples by
//! [`build_sample`] and cannot be set independently.

use crate::gesture_constants::{DEFAULT_MIN_VELOCITY_INTERVAL_MS, VELOCITY_PERCENT_SCALE};
use crate::input::PointerInput;
use dragkit_geometry::{Rect, Size, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalDirection::Left => "left",
            HorizontalDirection::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    Up,
    Down,
}

impl VerticalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalDirection::Up => "up",
            VerticalDirection::Down => "down",
        }
    }
}

/// Sign of motion on each axis; `None` when the axis did not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DragDirection {
    pub x: Option<HorizontalDirection>,
    pub y: Option<VerticalDirection>,
}

impl DragDirection {
    pub const NONE: Self = Self { x: None, y: None };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    element_point: Vector,
    window_point: Vector,
    timestamp: f64,
    direction: DragDirection,
    distance: Vector,
    velocity: Vector,
}

impl DragGesture {
    /// Pointer position relative to the surface origin frozen at drag start.
    pub fn element_point(&self) -> Vector {
        self.element_point
    }

    /// Pointer position in page coordinates.
    pub fn window_point(&self) -> Vector {
        self.window_point
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn direction(&self) -> DragDirection {
        self.direction
    }

    /// Signed displacement from the first sample of the drag.
    pub fn distance(&self) -> Vector {
        self.distance
    }

    /// Magnitude of motion since the previous sample, in percent of the
    /// viewport per millisecond.
    pub fn velocity(&self) -> Vector {
        self.velocity
    }
}

/// Everything besides the pointer itself that a sample depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleContext {
    /// Surface bounds captured at drag start.
    pub bounds: Rect,
    pub viewport: Size,
    pub min_velocity_interval_ms: f64,
}

impl SampleContext {
    pub fn new(bounds: Rect, viewport: Size) -> Self {
        Self {
            bounds,
            viewport,
            min_velocity_interval_ms: DEFAULT_MIN_VELOCITY_INTERVAL_MS,
        }
    }

    pub fn with_min_velocity_interval(mut self, millis: f64) -> Self {
        self.min_velocity_interval_ms = millis;
        self
    }
}

/// Builds a sample from a pointer event.
///
/// - without `prior`, this is the first sample of a drag: no direction, zero
///   distance and zero velocity;
/// - with `prior` only, direction and velocity are relative to `prior` and
///   distance stays zero;
/// - with both, distance is additionally measured from `first`.
pub fn build_sample(
    input: &PointerInput,
    context: &SampleContext,
    first: Option<&DragGesture>,
    prior: Option<&DragGesture>,
) -> DragGesture {
    let mut sample = DragGesture {
        element_point: context.bounds.to_local(input.page_position),
        window_point: input.page_position,
        timestamp: input.timestamp,
        direction: DragDirection::NONE,
        distance: Vector::ZERO,
        velocity: Vector::ZERO,
    };

    let Some(prior) = prior else {
        return sample;
    };
    sample.velocity = velocity_with_min_interval(
        prior,
        &sample,
        context.viewport,
        context.min_velocity_interval_ms,
    );
    sample.direction = direction(prior, &sample);

    let Some(first) = first else {
        return sample;
    };
    sample.distance = distance(first, &sample);

    sample
}

/// Direction of travel from `start` to `end` in page coordinates.
///
/// Screen y grows downward, so a negative y delta is `Up`.
pub fn direction(start: &DragGesture, end: &DragGesture) -> DragDirection {
    let delta = end.window_point - start.window_point;

    let x = if delta.x == 0.0 {
        None
    } else if delta.x < 0.0 {
        Some(HorizontalDirection::Left)
    } else {
        Some(HorizontalDirection::Right)
    };

    let y = if delta.y == 0.0 {
        None
    } else if delta.y < 0.0 {
        Some(VerticalDirection::Up)
    } else {
        Some(VerticalDirection::Down)
    };

    DragDirection { x, y }
}

/// Velocity between two samples using the default minimum interval.
pub fn velocity(start: &DragGesture, end: &DragGesture, viewport: Size) -> Vector {
    velocity_with_min_interval(start, end, viewport, DEFAULT_MIN_VELOCITY_INTERVAL_MS)
}

/// Velocity between two samples, in percent of the viewport per millisecond.
///
/// Only the magnitude is reported; sign lives in [`direction`]. The elapsed
/// time is clamped to at least `min_interval_ms`, so equal or out-of-order
/// timestamps saturate to a finite value. A zero-sized viewport axis reports
/// zero velocity on that axis.
pub fn velocity_with_min_interval(
    start: &DragGesture,
    end: &DragGesture,
    viewport: Size,
    min_interval_ms: f64,
) -> Vector {
    let elapsed = (end.timestamp - start.timestamp).max(min_interval_ms);
    let delta = start.window_point - end.window_point;

    Vector::new(
        axis_velocity(delta.x, viewport.width, elapsed),
        axis_velocity(delta.y, viewport.height, elapsed),
    )
}

fn axis_velocity(delta: f32, extent: f32, elapsed_ms: f64) -> f32 {
    if extent <= 0.0 || !extent.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    let ratio = (VELOCITY_PERCENT_SCALE / extent) * delta;
    (f64::from(ratio) / elapsed_ms).abs() as f32
}

/// Signed displacement from `start` to `end`.
pub fn distance(start: &DragGesture, end: &DragGesture) -> Vector {
    end.window_point - start.window_point
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;

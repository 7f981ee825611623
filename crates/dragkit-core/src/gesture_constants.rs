//! Shared timing constants for drag tracking.
//!
//! Both values are in milliseconds, matching the timestamps carried by
//! browser pointer events.

/// Minimum time between two samples that advance the stored gesture.
///
/// One frame at 60 Hz. Moves arriving faster than this still schedule a
/// frame notification, but they do not replace the last sample.
pub const DEFAULT_THROTTLE_INTERVAL_MS: f64 = 16.0;

/// Lower bound for the elapsed time used in velocity math.
///
/// Two moves sharing a timestamp are common on coarse event clocks. Clamping
/// the interval keeps velocity finite instead of producing `inf`/`NaN`.
pub const DEFAULT_MIN_VELOCITY_INTERVAL_MS: f64 = 1.0;

/// Viewport extent that maps to 100% in velocity units.
pub const VELOCITY_PERCENT_SCALE: f32 = 100.0;

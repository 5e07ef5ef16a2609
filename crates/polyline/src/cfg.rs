//! Tolerance and validation constants (internal defaults).
//!
//! Policy
//! - Fixed `f64` constants, converted to the coordinate type at the call site
//!   with `nalgebra::convert`. No per-instance tolerance juggling.

/// Per-coordinate absolute tolerance used by `Polyline == Polyline` (inclusive).
pub const EQ_EPS: f64 = 1e-5;
/// Exclusive lower bound for the triangle apex angle, in degrees.
pub const ANGLE_MIN_DEG: f64 = 0.0;
/// Exclusive upper bound for the triangle apex angle, in degrees.
pub const ANGLE_MAX_DEG: f64 = 180.0;

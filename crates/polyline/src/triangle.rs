//! Isosceles "triangle" factory.
//!
//! The result is an open two-segment path `O → A → B` with `|OA| = |AB| = side`
//! and `O`, `B` on the x-axis. Each leg meets the x-axis at `angle / 2`. The
//! base `OB` is not part of the path, so `length()` is `2 · side`.

use nalgebra::RealField;

use crate::cfg::{ANGLE_MAX_DEG, ANGLE_MIN_DEG};
use crate::geom2::{Point, Polyline, PolylineError};

/// Build `(0,0)`, `side·(cos(a/2), sin(a/2))`, `(2·side·cos(a/2), 0)` for `a = angle_deg`.
///
/// Errors
/// - `InvalidArgument` unless `0 < angle_deg < 180` and `side` is finite and `> 0`.
pub fn isosceles<T: RealField + Copy>(angle_deg: T, side: T) -> Result<Polyline<T>, PolylineError> {
    let lo: T = nalgebra::convert(ANGLE_MIN_DEG);
    let hi: T = nalgebra::convert(ANGLE_MAX_DEG);
    if !(angle_deg > lo && angle_deg < hi) {
        return Err(PolylineError::invalid(format!(
            "angle must lie strictly between {ANGLE_MIN_DEG} and {ANGLE_MAX_DEG} degrees (got {angle_deg})"
        )));
    }
    let zero: T = nalgebra::zero();
    if !(side > zero && side.is_finite()) {
        return Err(PolylineError::invalid(format!(
            "side length must be finite and > 0 (got {side})"
        )));
    }
    let half = angle_deg * T::pi() / (hi + hi);
    let (s, c) = half.sin_cos();
    Ok(Polyline::from(vec![
        Point::origin(),
        Point::new(side * c, side * s),
        Point::new((side + side) * c, zero),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_degrees_side_two() {
        let t = isosceles(60.0_f64, 2.0).unwrap();
        let r3 = 3.0_f64.sqrt();
        let expected = Polyline::from(vec![
            Point::new(0.0, 0.0),
            Point::new(r3, 1.0),
            Point::new(2.0 * r3, 0.0),
        ]);
        assert_eq!(t.len(), 3);
        assert_eq!(t, expected);
        // Two legs only; the base is not closed.
        assert!((t.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn legs_have_side_length_for_any_valid_angle() {
        for &a in &[1.0_f64, 30.0, 90.0, 135.0, 179.0] {
            let t = isosceles(a, 1.5).unwrap();
            let legs: Vec<f64> = t.segment_lengths().collect();
            assert!(legs.iter().all(|l| (l - 1.5).abs() < 1e-12), "angle {a}");
        }
    }

    #[test]
    fn works_for_f32() {
        let t = isosceles(90.0_f32, 1.0).unwrap();
        assert!((t.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let cases = [
            (0.0, 2.0),
            (180.0, 2.0),
            (-10.0, 2.0),
            (200.0, 2.0),
            (f64::NAN, 2.0),
            (60.0, 0.0),
            (60.0, -1.0),
            (60.0, f64::NAN),
            (60.0, f64::INFINITY),
        ];
        for (angle, side) in cases {
            let err = isosceles(angle, side).unwrap_err();
            assert!(
                matches!(err, PolylineError::InvalidArgument { .. }),
                "angle={angle} side={side}"
            );
        }
    }
}

//! Random polylines (uniform coordinates + replay tokens).
//!
//! Model
//! - Every coordinate is drawn independently from `U[lower, upper)`; per point
//!   `x` is drawn before `y`.
//! - The caller owns the randomness: pass any `Rng`, or a `ReplayToken`
//!   `(seed, index)` that is mixed into a single `StdRng`.

use nalgebra::RealField;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Point, Polyline, PolylineError};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Deterministic generator for this token.
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

impl<T> Polyline<T>
where
    T: RealField + Copy + SampleUniform,
{
    /// `count` points with coordinates drawn uniformly from `[lower, upper)`.
    ///
    /// Errors
    /// - `InvalidArgument` if a bound is not finite, `lower >= upper`,
    ///   `upper - lower` overflows, or `count` points cannot be allocated.
    pub fn random<R: Rng + ?Sized>(
        count: usize,
        lower: T,
        upper: T,
        rng: &mut R,
    ) -> Result<Self, PolylineError> {
        let dist = coordinate_distribution(lower, upper)?;
        let mut points = Vec::new();
        points
            .try_reserve_exact(count)
            .map_err(|e| PolylineError::invalid(format!("cannot hold {count} points: {e}")))?;
        for _ in 0..count {
            let x = dist.sample(rng);
            let y = dist.sample(rng);
            points.push(Point::new(x, y));
        }
        Ok(Self::from(points))
    }

    /// Same as `random`, driven by the generator of `tok`.
    pub fn random_replay(
        count: usize,
        lower: T,
        upper: T,
        tok: ReplayToken,
    ) -> Result<Self, PolylineError> {
        let mut rng = tok.to_std_rng();
        Self::random(count, lower, upper, &mut rng)
    }
}

fn coordinate_distribution<T>(lower: T, upper: T) -> Result<Uniform<T>, PolylineError>
where
    T: RealField + Copy + SampleUniform,
{
    if !(lower.is_finite() && upper.is_finite()) {
        return Err(PolylineError::invalid("random bounds must be finite"));
    }
    if lower >= upper {
        return Err(PolylineError::invalid(format!(
            "random bounds need lower < upper (got {lower} >= {upper})"
        )));
    }
    if !(upper - lower).is_finite() {
        return Err(PolylineError::invalid("random bounds span overflows"));
    }
    Ok(Uniform::new(lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = Polyline::<f64>::random_replay(16, -3.0, 5.0, tok).unwrap();
        let b = Polyline::<f64>::random_replay(16, -3.0, 5.0, tok).unwrap();
        assert_eq!(a.len(), 16);
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn distinct_indices_give_distinct_draws() {
        let a = Polyline::<f64>::random_replay(4, 0.0, 1.0, ReplayToken::new(1, 0)).unwrap();
        let b = Polyline::<f64>::random_replay(4, 0.0, 1.0, ReplayToken::new(1, 1)).unwrap();
        assert!(a != b);
    }

    #[test]
    fn coordinates_stay_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..50 {
            let p = Polyline::<f64>::random(64, -1.5, 2.5, &mut rng).unwrap();
            for pt in &p {
                assert!((-1.5..2.5).contains(&pt.x));
                assert!((-1.5..2.5).contains(&pt.y));
            }
        }
    }

    #[test]
    fn f32_coordinates() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = Polyline::<f32>::random(10, 0.0, 1.0, &mut rng).unwrap();
        assert!(p.iter().all(|pt| (0.0..1.0).contains(&pt.x)));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let p = Polyline::<f64>::random(0, 0.0, 1.0, &mut rng).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn unallocatable_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Polyline::<f64>::random(usize::MAX, 0.0, 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, PolylineError::InvalidArgument { .. }));
    }

    #[test]
    fn rejects_bad_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        for (lo, hi) in [
            (1.0, 1.0),
            (2.0, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::INFINITY),
            (-f64::MAX, f64::MAX),
        ] {
            let err = Polyline::<f64>::random(3, lo, hi, &mut rng).unwrap_err();
            assert!(matches!(err, PolylineError::InvalidArgument { .. }), "{lo}..{hi}");
        }
    }
}

//! Basic 2D value types and the error shared by polyline operations.
//!
//! - `Point`: plain `(x, y)` pair, convertible to/from `nalgebra::Vector2`.
//! - `PolylineError`: out-of-range access and rejected arguments.

use nalgebra::{RealField, Vector2};
use std::fmt;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: RealField + Copy> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self::new(nalgebra::zero(), nalgebra::zero())
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to `other`, without overflow in the squared terms.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        let d = other.to_vector() - self.to_vector();
        d.x.hypot(d.y)
    }
}

impl<T: RealField + Copy> From<Vector2<T>> for Point<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: RealField + Copy> From<Point<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        p.to_vector()
    }
}

impl<T: RealField + Copy> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors surfaced by polyline construction and access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolylineError {
    /// Indexed access at `index` on a polyline holding `len` points.
    OutOfRange { index: usize, len: usize },
    /// A constructor or factory rejected its parameters.
    InvalidArgument { reason: String },
}

impl PolylineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for polyline of {len} points")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for PolylineError {}

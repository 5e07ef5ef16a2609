//! `Polyline<T>`: owned, ordered sequence of 2D points.
//!
//! Semantics
//! - `length()` is the open-path length: segments join consecutive points only;
//!   the last point is never joined back to the first.
//! - `==` compares coordinate-wise with absolute tolerance `cfg::EQ_EPS`
//!   (inclusive). It is not transitive, so there is no `Eq`.
//! - `+` concatenates: `&a + &b`, `&a + point` (append), `point + &a` (prepend).

use nalgebra::{RealField, Vector2};
use std::fmt;
use std::ops::{Add, Index, IndexMut};

use super::types::{Point, PolylineError};
use crate::cfg::EQ_EPS;

/// Ordered sequence of points, read as a path of connected segments.
#[derive(Clone, Debug)]
pub struct Polyline<T> {
    points: Vec<Point<T>>,
}

impl<T: RealField + Copy> Polyline<T> {
    /// Single-point polyline.
    pub fn from_point(point: Point<T>) -> Self {
        let mut points = Vec::with_capacity(1);
        points.push(point);
        Self { points }
    }

    /// `count` points, all at the origin.
    pub fn zeros(count: usize) -> Self {
        Self {
            points: vec![Point::origin(); count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Allocated slots; always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point<T>> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point<T>> {
        self.points.last()
    }

    pub fn get(&self, index: usize) -> Result<&Point<T>, PolylineError> {
        let len = self.points.len();
        self.points
            .get(index)
            .ok_or(PolylineError::OutOfRange { index, len })
    }

    /// Mutable handle to the point at `index`; writes through it update the polyline.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Point<T>, PolylineError> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(PolylineError::OutOfRange { index, len })
    }

    /// New polyline holding `self` followed by `other`. Neither input changes.
    pub fn concat(&self, other: &Self) -> Self {
        let mut points = Vec::with_capacity(self.len() + other.len());
        points.extend_from_slice(&self.points);
        points.extend_from_slice(&other.points);
        Self { points }
    }

    /// Lengths of the `len() - 1` segments, in path order.
    pub fn segment_lengths(&self) -> impl Iterator<Item = T> + '_ {
        self.points.windows(2).map(|w| w[0].distance(w[1]))
    }

    /// Total path length; `0` for fewer than two points.
    pub fn length(&self) -> T {
        self.segment_lengths()
            .fold(nalgebra::zero(), |acc: T, d| acc + d)
    }

    /// Shift every point by `offset`.
    pub fn translate(&mut self, offset: Vector2<T>) {
        for p in &mut self.points {
            *p = Point::from(p.to_vector() + offset);
        }
    }

    /// Same length and every coordinate pair within `eps` (inclusive).
    pub fn approx_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.len() == other.len()
            && self.points.iter().zip(&other.points).all(|(a, b)| {
                <T as nalgebra::ComplexField>::abs(a.x - b.x) <= eps
                    && <T as nalgebra::ComplexField>::abs(a.y - b.y) <= eps
            })
    }
}

impl<T: RealField + Copy> Default for Polyline<T> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<T: RealField + Copy> PartialEq for Polyline<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, nalgebra::convert(EQ_EPS))
    }
}

impl<T: RealField + Copy> From<Vec<Point<T>>> for Polyline<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self { points }
    }
}

impl<T: RealField + Copy> FromIterator<Point<T>> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: RealField + Copy> IntoIterator for &'a Polyline<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Panics when `index >= len()`, like slice indexing. See `get` for the fallible form.
impl<T> Index<usize> for Polyline<T> {
    type Output = Point<T>;
    #[inline]
    fn index(&self, index: usize) -> &Point<T> {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Point<T> {
        &mut self.points[index]
    }
}

impl<T: RealField + Copy> Add<&Polyline<T>> for &Polyline<T> {
    type Output = Polyline<T>;
    fn add(self, rhs: &Polyline<T>) -> Polyline<T> {
        self.concat(rhs)
    }
}

impl<T: RealField + Copy> Add for Polyline<T> {
    type Output = Polyline<T>;
    fn add(mut self, rhs: Polyline<T>) -> Polyline<T> {
        self.points.extend(rhs.points);
        self
    }
}

/// Append.
impl<T: RealField + Copy> Add<Point<T>> for &Polyline<T> {
    type Output = Polyline<T>;
    fn add(self, rhs: Point<T>) -> Polyline<T> {
        self.concat(&Polyline::from_point(rhs))
    }
}

impl<T: RealField + Copy> Add<Point<T>> for Polyline<T> {
    type Output = Polyline<T>;
    fn add(mut self, rhs: Point<T>) -> Polyline<T> {
        self.points.push(rhs);
        self
    }
}

/// Prepend: `point + polyline` puts `point` first.
impl<T: RealField + Copy> Add<&Polyline<T>> for Point<T> {
    type Output = Polyline<T>;
    fn add(self, rhs: &Polyline<T>) -> Polyline<T> {
        Polyline::from_point(self).concat(rhs)
    }
}

impl<T: RealField + Copy> Add<Polyline<T>> for Point<T> {
    type Output = Polyline<T>;
    fn add(self, mut rhs: Polyline<T>) -> Polyline<T> {
        rhs.points.insert(0, self);
        rhs
    }
}

impl<T: fmt::Display> fmt::Display for Polyline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

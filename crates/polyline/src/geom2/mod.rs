//! 2D points and polylines.
//!
//! Purpose
//! - Provide `Polyline<T>`, an owned, ordered sequence of `Point<T>` read as an
//!   open path of line segments between consecutive points.
//! - Keep the API small: indexed access, concatenation via `+`, path length and
//!   tolerance-based equality.
//!
//! Growth
//! - Storage is a plain `Vec`. Borrowed `+` forms build a fresh polyline and
//!   leave both operands untouched; by-value forms reuse the left storage.
//!
//! Code cross-refs: `Point`, `Polyline`, `PolylineError`, `rand::ReplayToken`

mod polyline;
pub mod rand;
mod types;

pub use polyline::Polyline;
pub use types::{Point, PolylineError};

//! Growable 2D polylines over floating-point coordinates.
//!
//! Contents
//! - `geom2`: `Point`, `Polyline`, random construction and tolerances.
//! - `triangle`: validated factory for the isosceles two-segment path.
//!
//! Conventions
//! - Coordinates are generic over `T: RealField + Copy` (`f32`, `f64`).
//! - Equality is tolerance-based (`cfg::EQ_EPS`), never bitwise.
//! - Randomness is always injected (`Rng` or `ReplayToken`), never global.

pub mod cfg;
pub mod geom2;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, Polyline, PolylineError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::ReplayToken;
    pub use crate::geom2::{Point, Polyline, PolylineError};
    pub use crate::triangle::isosceles;
    pub use nalgebra::Vector2 as Vec2;
}

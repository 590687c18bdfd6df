#![warn(missing_docs)]

//! Math types for the asp ray-cast renderer.
//!
//! Thin wrappers around nalgebra: 3D value types for points, positioned
//! directions and rays, left-to-right reductions over point sequences,
//! the rotation taking one direction onto another, and tolerance constants.

mod error;
mod primitives;
pub mod reduce;
mod rotation;

pub use error::{GeometryError, Result};
pub use primitives::{Point, Ray, Vector};
pub use reduce::{add, divide, multiply, subtract};
pub use rotation::{orthogonal_axis, rotation_matrix};

use nalgebra::{Matrix3, Vector3};

/// A 3-component real vector (coordinates or direction).
pub type Vec3 = Vector3<f64>;

/// A 3x3 real matrix.
pub type Mat3 = Matrix3<f64>;

/// Convert an untyped slice into a [`Vec3`].
///
/// Fails with [`GeometryError::Dimension`] unless `values` holds exactly three components.
pub fn vec3_from_slice(values: &[f64]) -> Result<Vec3> {
    match values {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(GeometryError::Dimension {
            expected: 3,
            actual: values.len(),
        }),
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Distance below which a point is considered to lie on a plane.
    pub linear: f64,
    /// Magnitude below which a dot or cross product is treated as zero
    /// (parallel ray/plane, parallel rotation directions).
    pub parallel: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-12 parallel).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        parallel: 1e-12,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point, b: &Point) -> bool {
        a.distance(b) < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if a product of directions is effectively zero.
    pub fn is_parallel(&self, d: f64) -> bool {
        d.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

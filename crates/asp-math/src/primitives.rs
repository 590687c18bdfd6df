//! Point, positioned direction and ray value types.
//!
//! A [`Vector`] is a [`Point`] plus a direction, and a [`Ray`] is a
//! [`Vector`] plus a scalar payload. Translation only ever moves the
//! position; directions are fixed at construction.

use crate::{vec3_from_slice, Mat3, Result, Vec3};

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    xyz: Vec3,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Vec3::new(x, y, z),
        }
    }

    /// Create a point at the coordinates held by `xyz`.
    pub fn from_vec(xyz: Vec3) -> Self {
        Self { xyz }
    }

    /// Create a point from an untyped coordinate slice.
    ///
    /// Fails with a dimension error unless `xyz` has exactly three components.
    pub fn from_slice(xyz: &[f64]) -> Result<Self> {
        Ok(Self::from_vec(vec3_from_slice(xyz)?))
    }

    /// The world origin.
    pub fn origin() -> Self {
        Self::from_vec(Vec3::zeros())
    }

    /// Coordinates of the point.
    #[inline]
    pub fn xyz(&self) -> &Vec3 {
        &self.xyz
    }

    /// Move the point by `delta`.
    pub fn translate_by(&mut self, delta: &[f64]) -> Result<&mut Self> {
        self.xyz += vec3_from_slice(delta)?;
        Ok(self)
    }

    /// Move the point to `position`.
    pub fn translate_to(&mut self, position: &[f64]) -> Result<&mut Self> {
        self.xyz = vec3_from_slice(position)?;
        Ok(self)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.xyz - other.xyz).norm()
    }
}

impl From<Vec3> for Point {
    fn from(xyz: Vec3) -> Self {
        Self::from_vec(xyz)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A point with an attached direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    position: Point,
    direction: Vec3,
}

impl Vector {
    /// Create a vector at `position` pointing along `direction`.
    ///
    /// The direction is stored as given; it is not normalized.
    pub fn new(position: Point, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Create a vector from untyped position and direction slices.
    pub fn from_slices(position: &[f64], direction: &[f64]) -> Result<Self> {
        Ok(Self::new(
            Point::from_slice(position)?,
            vec3_from_slice(direction)?,
        ))
    }

    /// Position of the vector.
    #[inline]
    pub fn position(&self) -> &Point {
        &self.position
    }

    /// Direction of the vector.
    #[inline]
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// Move the position by `delta`. The direction is unchanged.
    pub fn translate_by(&mut self, delta: &[f64]) -> Result<&mut Self> {
        self.position.translate_by(delta)?;
        Ok(self)
    }

    /// Move the position to `position`. The direction is unchanged.
    pub fn translate_to(&mut self, position: &[f64]) -> Result<&mut Self> {
        self.position.translate_to(position)?;
        Ok(self)
    }

    /// Evaluate `position + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        Point::from_vec(self.position.xyz() + t * self.direction)
    }
}

/// A vector carrying a scalar payload, e.g. a hit indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    vector: Vector,
    value: f64,
}

impl Ray {
    /// Create a ray from `origin` along `direction` with a zero value.
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            vector: Vector::new(origin, direction),
            value: 0.0,
        }
    }

    /// Create a ray from untyped origin and direction slices.
    pub fn from_slices(origin: &[f64], direction: &[f64]) -> Result<Self> {
        Ok(Self {
            vector: Vector::from_slices(origin, direction)?,
            value: 0.0,
        })
    }

    /// Replace the payload value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Origin of the ray.
    #[inline]
    pub fn origin(&self) -> &Point {
        self.vector.position()
    }

    /// Direction of the ray (not necessarily unit length).
    #[inline]
    pub fn direction(&self) -> &Vec3 {
        self.vector.direction()
    }

    /// The underlying positioned direction.
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// Payload value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the payload value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Move the origin by `delta`.
    pub fn translate_by(&mut self, delta: &[f64]) -> Result<&mut Self> {
        self.vector.translate_by(delta)?;
        Ok(self)
    }

    /// Move the origin to `position`.
    pub fn translate_to(&mut self, position: &[f64]) -> Result<&mut Self> {
        self.vector.translate_to(position)?;
        Ok(self)
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.vector.at(t)
    }

    /// Same origin and value, direction multiplied by `rotation`.
    pub fn rotated(&self, rotation: &Mat3) -> Self {
        Self {
            vector: Vector::new(*self.origin(), rotation * self.direction()),
            value: self.value,
        }
    }
}

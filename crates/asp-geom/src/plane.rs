//! Planes and triangles defined by ordered points.
//!
//! The normal is `(p1 − p0) × (p2 − p0)` normalized, so vertex winding
//! decides which side it faces. Points are owned by value and never
//! mutated once bound, so the cached plane equation stays valid for the
//! lifetime of the plane.

use std::sync::OnceLock;

use asp_math::{subtract, GeometryError, Point, Result, Tolerance, Vec3};

/// Plane equation `a·x + b·y + c·z = d` with `(a, b, c)` the unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoefficients {
    /// Unit normal `(a, b, c)`.
    pub normal: Vec3,
    /// Offset `d = normal · p0`.
    pub d: f64,
}

impl PlaneCoefficients {
    /// Coefficients as `[a, b, c, d]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    /// Signed distance from the plane; positive on the side the normal faces.
    pub fn signed_distance(&self, point: &Point) -> f64 {
        self.normal.dot(point.xyz()) - self.d
    }
}

/// A plane through an ordered sequence of at least three points.
///
/// Only the first three points determine orientation.
#[derive(Debug, Clone)]
pub struct Plane {
    points: Vec<Point>,
    coefficients: OnceLock<Result<PlaneCoefficients>>,
}

impl Plane {
    /// Create a plane from `points`.
    ///
    /// Fails with an invalid argument error when fewer than three points are given.
    /// Collinear points are accepted here; the error surfaces from [`Plane::normal`].
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidArgument(format!(
                "plane requires at least 3 points, got {}",
                points.len()
            )));
        }
        Ok(Self::from_points(points))
    }

    fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            coefficients: OnceLock::new(),
        }
    }

    /// The defining points, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Unit normal, computed on first access and cached.
    ///
    /// Fails with an invalid argument error if the first three points are collinear.
    pub fn normal(&self) -> Result<Vec3> {
        self.coefficients().map(|c| c.normal)
    }

    /// Plane equation coefficients, computed on first access and cached.
    pub fn coefficients(&self) -> Result<PlaneCoefficients> {
        self.coefficients
            .get_or_init(|| derive_coefficients(&self.points))
            .clone()
    }

    /// Check whether `point` lies on the plane within the linear tolerance.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        let coeffs = self.coefficients()?;
        Ok(Tolerance::DEFAULT.is_zero(coeffs.signed_distance(point)))
    }
}

fn derive_coefficients(points: &[Point]) -> Result<PlaneCoefficients> {
    let e1 = subtract(&[points[1], points[0]])?;
    let e2 = subtract(&[points[2], points[0]])?;
    let normal = e1
        .xyz()
        .cross(e2.xyz())
        .try_normalize(Tolerance::DEFAULT.parallel)
        .ok_or_else(|| {
            GeometryError::InvalidArgument("plane points are collinear".into())
        })?;
    let d = normal.dot(points[0].xyz());
    // Cross products of huge edges overflow and normalize to NaN
    if !(normal.iter().all(|c| c.is_finite()) && d.is_finite()) {
        return Err(GeometryError::InvalidArgument(
            "plane equation is not finite".into(),
        ));
    }
    Ok(PlaneCoefficients { normal, d })
}

/// A triangular facet: a plane through exactly three vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    plane: Plane,
}

impl Triangle {
    /// Create a triangle from a point list.
    ///
    /// Fails with an invalid argument error unless exactly three points are given.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() != 3 {
            return Err(GeometryError::InvalidArgument(format!(
                "triangle requires exactly 3 points, got {}",
                points.len()
            )));
        }
        Ok(Self {
            plane: Plane::from_points(points),
        })
    }

    /// Create a triangle from its three vertices.
    pub fn from_vertices(v0: Point, v1: Point, v2: Point) -> Self {
        Self {
            plane: Plane::from_points(vec![v0, v1, v2]),
        }
    }

    /// Vertices in winding order.
    pub fn vertices(&self) -> [Point; 3] {
        let p = self.plane.points();
        [p[0], p[1], p[2]]
    }

    /// The supporting plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Unit normal of the supporting plane.
    pub fn normal(&self) -> Result<Vec3> {
        self.plane.normal()
    }

    /// Plane equation of the supporting plane.
    pub fn coefficients(&self) -> Result<PlaneCoefficients> {
        self.plane.coefficients()
    }

    /// Whether the vertices are collinear, leaving the normal undefined.
    pub fn is_degenerate(&self) -> bool {
        self.plane.normal().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tilted() -> Plane {
        Plane::new(vec![
            Point::new(1.0, 0.0, 2.0),
            Point::new(0.0, 3.0, -1.0),
            Point::new(-2.0, 1.0, 0.5),
            Point::new(4.0, 4.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_xy_plane_normal() {
        let plane = Plane::new(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(plane.normal().unwrap(), Vec3::z(), epsilon = 1e-12);
        assert!(plane.coefficients().unwrap().d.abs() < 1e-12);
    }

    #[test]
    fn test_winding_flips_normal() {
        let ccw = Triangle::from_vertices(
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        );
        let cw = Triangle::from_vertices(
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
        );
        assert_relative_eq!(ccw.normal().unwrap(), Vec3::z(), epsilon = 1e-12);
        assert_relative_eq!(cw.normal().unwrap(), -Vec3::z(), epsilon = 1e-12);
        assert!((ccw.coefficients().unwrap().d - 1.0).abs() < 1e-12);
        assert!((cw.coefficients().unwrap().d + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_points_satisfy_plane_equation() {
        let plane = tilted();
        let coeffs = plane.coefficients().unwrap();
        assert!((coeffs.normal.norm() - 1.0).abs() < 1e-12);
        for p in &plane.points()[..3] {
            assert!((coeffs.normal.dot(p.xyz()) - coeffs.d).abs() < 1e-12);
            assert!(plane.contains(p).unwrap());
        }
        // The fourth point does not constrain the plane
        assert!(!plane.contains(&plane.points()[3]).unwrap());
    }

    #[test]
    fn test_coefficients_array() {
        let plane = tilted();
        let coeffs = plane.coefficients().unwrap();
        let [a, b, c, d] = coeffs.as_array();
        assert_eq!(Vec3::new(a, b, c), coeffs.normal);
        assert_eq!(d, coeffs.d);
    }

    #[test]
    fn test_signed_distance() {
        let plane = Plane::new(vec![
            Point::new(0.0, 0.0, 2.0),
            Point::new(1.0, 0.0, 2.0),
            Point::new(0.0, 1.0, 2.0),
        ])
        .unwrap();
        let coeffs = plane.coefficients().unwrap();
        assert!((coeffs.signed_distance(&Point::new(5.0, 5.0, 7.0)) - 5.0).abs() < 1e-12);
        assert!((coeffs.signed_distance(&Point::new(0.0, 0.0, 0.0)) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_plane_too_few_points() {
        let result = Plane::new(vec![Point::origin(), Point::new(1.0, 0.0, 0.0)]);
        assert!(matches!(result, Err(GeometryError::InvalidArgument(_))));
    }

    #[test]
    fn test_collinear_plane() {
        let plane = Plane::new(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 2.0, 2.0),
        ])
        .unwrap();
        assert!(matches!(plane.normal(), Err(GeometryError::InvalidArgument(_))));
        // Cached failure is reported again rather than recomputed into garbage
        assert!(plane.coefficients().is_err());
    }

    #[test]
    fn test_overflowing_plane_rejected() {
        let tri = Triangle::from_vertices(
            Point::new(-1e200, -1e200, -1e200),
            Point::new(1e200, -1e200, -1e200),
            Point::new(0.0, 1e200, -1e200),
        );
        assert!(matches!(tri.normal(), Err(GeometryError::InvalidArgument(_))));
        assert!(tri.is_degenerate());
    }

    #[test]
    fn test_triangle_point_count() {
        let four = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
        ];
        assert!(matches!(
            Triangle::new(four),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(Triangle::new(vec![Point::origin(); 2]).is_err());
        assert!(Triangle::new(vec![Point::origin(); 3]).is_ok());
    }

    #[test]
    fn test_triangle_degenerate() {
        let tri = Triangle::from_vertices(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
        );
        assert!(tri.is_degenerate());
        assert_eq!(tri.vertices()[2], Point::new(2.0, 0.0, 0.0));
    }
}

//! Ray-plane intersection (closed-form).

use asp_geom::Plane;
use asp_math::{GeometryError, Point, Ray, Result, Tolerance};

/// Result of a ray-plane intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Parameter along the ray; negative when the plane lies behind the origin.
    pub t: f64,
    /// Intersection point `origin + t * direction`.
    pub point: Point,
}

/// Intersect a ray with a plane.
///
/// Solves `n · (p + t·dir) = d` for `t`. Hits behind the origin are returned
/// with a negative `t`; filtering them is up to the caller.
///
/// Fails with a degenerate geometry error when the ray is parallel to the
/// plane or has a zero-length direction, and with an invalid argument error
/// when the plane's points are collinear.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Result<PlaneHit> {
    let tol = Tolerance::DEFAULT;
    let coeffs = plane.coefficients()?;
    let direction = ray.direction();

    let len = direction.norm();
    if tol.is_parallel(len) {
        return Err(GeometryError::DegenerateGeometry(
            "ray direction has zero length".into(),
        ));
    }

    let denom = coeffs.normal.dot(direction);
    if tol.is_parallel(denom / len) {
        return Err(GeometryError::DegenerateGeometry(
            "ray is parallel to plane".into(),
        ));
    }

    let t = (coeffs.d - coeffs.normal.dot(ray.origin().xyz())) / denom;
    if !t.is_finite() {
        return Err(GeometryError::DegenerateGeometry(format!(
            "ray parameter is not finite: {t}"
        )));
    }
    Ok(PlaneHit {
        t,
        point: ray.at(t),
    })
}

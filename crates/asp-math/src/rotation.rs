//! Rotation taking one direction onto another.

use crate::{GeometryError, Mat3, Result, Tolerance, Vec3};

/// Rotation matrix `R` with `R * â = b̂`.
///
/// Uses Rodrigues' rotation formula `I + V + V²·(1 − c)/s²` where `V` is the
/// cross-product matrix of `a × b`, `s = |a × b|` and `c = a · b`.
/// Parallel inputs return the identity; anti-parallel inputs return a
/// half-turn about [`orthogonal_axis`] of `a`.
///
/// Fails with a degenerate geometry error if either direction has zero length.
pub fn rotation_matrix(a: &Vec3, b: &Vec3) -> Result<Mat3> {
    let tol = Tolerance::DEFAULT;
    let a = a.try_normalize(tol.parallel).ok_or_else(|| {
        GeometryError::DegenerateGeometry("rotation source direction has zero length".into())
    })?;
    let b = b.try_normalize(tol.parallel).ok_or_else(|| {
        GeometryError::DegenerateGeometry("rotation target direction has zero length".into())
    })?;

    let v = a.cross(&b);
    let s = v.norm();
    let c = a.dot(&b);

    if tol.is_parallel(s) {
        if c > 0.0 {
            return Ok(Mat3::identity());
        }
        // Half-turn about unit axis u: 2uuᵀ − I
        let u = orthogonal_axis(&a);
        return Ok(2.0 * u * u.transpose() - Mat3::identity());
    }

    let vx = v.cross_matrix();
    Ok(Mat3::identity() + vx + vx * vx * ((1.0 - c) / (s * s)))
}

/// Unit axis perpendicular to `a`, built from the world axis least aligned with it.
///
/// Ties between equally aligned axes resolve toward X, then Y.
pub fn orthogonal_axis(a: &Vec3) -> Vec3 {
    let abs = a.abs();
    let world = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::x()
    } else if abs.y <= abs.z {
        Vec3::y()
    } else {
        Vec3::z()
    };
    a.cross(&world).normalize()
}

//! Point-in-triangle containment for points on a triangle's plane.

use asp_geom::Triangle;
use asp_math::{subtract, Point, Result};

/// Test if a point on the triangle's plane lies inside the triangle.
///
/// For each edge `(pi, pj)` in winding order, `(pj − pi) × (point − pi)` must
/// not point against the triangle normal. Points on an edge or vertex give a
/// zero product and count as inside, so adjacent triangles sharing an edge
/// leave no gap between them.
///
/// Fails with an invalid argument error when the triangle is degenerate.
pub fn point_in_triangle(point: &Point, triangle: &Triangle) -> Result<bool> {
    let normal = triangle.normal()?;
    let [p0, p1, p2] = triangle.vertices();

    for (a, b) in [(p0, p1), (p1, p2), (p2, p0)] {
        let edge = subtract(&[b, a])?;
        let to_point = subtract(&[*point, a])?;
        if edge.xyz().cross(to_point.xyz()).dot(&normal) < 0.0 {
            return Ok(false);
        }
    }
    Ok(true)
}

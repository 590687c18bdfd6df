//! Per-pixel rendering loop.
//!
//! Every camera ray is tested against every triangle. A (ray, triangle)
//! pair counts as a hit when the ray meets the triangle's plane at `t ≥ 0`
//! and the meeting point is inside the triangle. Pairs that cannot be
//! evaluated (parallel ray, collinear vertices) are misses for that pair
//! only; they never abort the render.
//!
//! Rays are independent, so the outer loop runs on the rayon thread pool
//! while the triangle slice is borrowed immutably for the whole pass.

use asp_geom::Triangle;
use asp_math::{Point, Ray, Result};
use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::containment::point_in_triangle;
use crate::intersect::{intersect_plane, PlaneHit};
use crate::{Camera, DepthImage, Grid, OccupancyImage};

/// A contained, front-facing ray-triangle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Index of the triangle in the slice that was traced.
    pub triangle: usize,
    /// Parameter along the ray.
    pub t: f64,
    /// Hit point.
    pub point: Point,
}

fn hit_triangle(ray: &Ray, triangle: &Triangle) -> Option<PlaneHit> {
    let hit = match intersect_plane(ray, triangle.plane()) {
        Ok(hit) => hit,
        Err(e) => {
            trace!("no intersection: {e}");
            return None;
        }
    };
    if hit.t < 0.0 {
        return None;
    }
    match point_in_triangle(&hit.point, triangle) {
        Ok(true) => Some(hit),
        Ok(false) => None,
        Err(e) => {
            trace!("containment failed: {e}");
            None
        }
    }
}

/// Whether `ray` hits any triangle.
///
/// Stops at the first qualifying triangle without resolving which one is
/// closest.
pub fn trace_any(ray: &Ray, triangles: &[Triangle]) -> bool {
    triangles.iter().any(|tri| hit_triangle(ray, tri).is_some())
}

/// The hit with the smallest `t ≥ 0`, if any.
///
/// Equal parameters resolve to the lower triangle index.
pub fn trace_nearest(ray: &Ray, triangles: &[Triangle]) -> Option<TriangleHit> {
    triangles
        .iter()
        .enumerate()
        .filter_map(|(i, tri)| {
            hit_triangle(ray, tri).map(|hit| TriangleHit {
                triangle: i,
                t: hit.t,
                point: hit.point,
            })
        })
        .min_by(|a, b| a.t.total_cmp(&b.t).then(a.triangle.cmp(&b.triangle)))
}

fn log_scene(camera: &Camera, triangles: &[Triangle]) {
    let [nx, ny] = camera.array_size();
    debug!(
        "rendering {nx}x{ny} detector against {} triangles",
        triangles.len()
    );
    let degenerate = triangles.iter().filter(|t| t.is_degenerate()).count();
    if degenerate > 0 {
        warn!("{degenerate} degenerate triangles will never be hit");
    }
}

/// Cast every camera ray into the scene.
///
/// Returns the rays in pixel order with their value set to 1.0 on a hit and
/// 0.0 on a miss.
pub fn cast(camera: &Camera, triangles: &[Triangle]) -> Result<Vec<Ray>> {
    log_scene(camera, triangles);
    let rays = camera.rays()?;
    Ok(rays
        .into_par_iter()
        .map(|ray| {
            let value = if trace_any(&ray, triangles) { 1.0 } else { 0.0 };
            ray.with_value(value)
        })
        .collect())
}

/// Render the binary occupancy image of `triangles` seen by `camera`.
///
/// The image is `array_size[0]` wide and `array_size[1]` tall, in the
/// pixel order of [`Camera::rays`].
pub fn snapshot(camera: &Camera, triangles: &[Triangle]) -> Result<OccupancyImage> {
    let [nx, ny] = camera.array_size();
    let pixels: Vec<u8> = cast(camera, triangles)?
        .iter()
        .map(|ray| u8::from(ray.value() > 0.0))
        .collect();
    let image = Grid::from_vec(nx, ny, pixels)?;
    debug!(
        "{} of {} pixels hit",
        image.count(|&v| v != 0),
        camera.pixel_count()
    );
    Ok(image)
}

/// Render the nearest hit parameter per pixel.
///
/// Since camera rays reach the detector plane at `t = 1`, depth is measured
/// in focal lengths along each pixel's ray.
pub fn depth_snapshot(camera: &Camera, triangles: &[Triangle]) -> Result<DepthImage> {
    log_scene(camera, triangles);
    let [nx, ny] = camera.array_size();
    let depths: Vec<Option<f64>> = camera
        .rays()?
        .par_iter()
        .map(|ray| trace_nearest(ray, triangles).map(|hit| hit.t))
        .collect();
    Grid::from_vec(nx, ny, depths)
}

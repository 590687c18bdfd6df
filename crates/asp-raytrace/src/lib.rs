#![warn(missing_docs)]

//! Ray-cast occupancy rendering for asp.
//!
//! A pinhole [`Camera`] casts one ray per detector pixel; each ray is
//! intersected analytically with the supporting plane of every scene
//! triangle and the hit point is tested for containment. No acceleration
//! structure is used: every ray visits every triangle.
//!
//! # Architecture
//!
//! - [`intersect`] - ray-plane intersection
//! - [`containment`] - inclusive point-in-triangle test
//! - [`Camera`] - detector grid and ray generation
//! - [`render`] - per-pixel loop producing an [`OccupancyImage`] or [`DepthImage`]
//!
//! # Example
//!
//! ```ignore
//! use asp_geom::{Scene, Triangle};
//! use asp_math::{Point, Vec3, Vector};
//! use asp_raytrace::{snapshot, Camera};
//!
//! let camera = Camera::new(Vector::new(Point::origin(), Vec3::z()), 1.0, [1, 1], [1.0, 1.0])?;
//! let scene: Scene = [Triangle::from_vertices(
//!     Point::new(-10.0, -10.0, 5.0),
//!     Point::new(10.0, -10.0, 5.0),
//!     Point::new(0.0, 10.0, 5.0),
//! )]
//! .into_iter()
//! .collect();
//!
//! let image = snapshot(&camera, scene.triangles())?;
//! assert_eq!(image.to_rows(), vec![vec![1]]);
//! ```

mod camera;
pub mod containment;
mod image;
pub mod intersect;
pub mod render;

pub use camera::{Camera, CameraConfig, OrientationConfig};
pub use containment::point_in_triangle;
pub use image::{DepthImage, Grid, OccupancyImage};
pub use intersect::{intersect_plane, PlaneHit};
pub use render::{cast, depth_snapshot, snapshot, trace_any, trace_nearest, TriangleHit};

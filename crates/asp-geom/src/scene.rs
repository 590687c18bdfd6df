//! Triangle scenes.

use asp_math::{GeometryError, Point, Result};
use log::debug;

use crate::Triangle;

/// An ordered collection of triangles rendered as one scene.
///
/// A render borrows the scene immutably for its whole duration, so rays
/// traced in parallel share the triangle list without locking.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    triangles: Vec<Triangle>,
}

impl Scene {
    /// Create a scene from already validated triangles.
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Build a scene from raw coordinate lists, one list of points per triangle.
    ///
    /// Fails with an invalid argument error if any entry does not hold exactly
    /// three points, or a dimension error if any coordinate is not 3 components.
    pub fn from_vertex_lists(lists: &[Vec<Vec<f64>>]) -> Result<Self> {
        let triangles = lists
            .iter()
            .enumerate()
            .map(|(i, list)| {
                let points = list
                    .iter()
                    .map(|xyz| Point::from_slice(xyz))
                    .collect::<Result<Vec<_>>>()?;
                Triangle::new(points).map_err(|e| match e {
                    GeometryError::InvalidArgument(msg) => {
                        GeometryError::InvalidArgument(format!("triangle {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("built scene with {} triangles", triangles.len());
        Ok(Self::new(triangles))
    }

    /// Append a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// All triangles, in insertion order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the scene has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of triangles whose vertices are collinear.
    pub fn degenerate_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }
}

impl FromIterator<Triangle> for Scene {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

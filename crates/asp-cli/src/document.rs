//! JSON scene documents and render output.

use std::path::Path;

use anyhow::{Context, Result};
use asp_geom::Scene;
use asp_raytrace::{Camera, CameraConfig, Grid};
use serde::{Deserialize, Serialize};

/// A camera plus the triangles it looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Camera configuration.
    pub camera: CameraConfig,
    /// One list of `[x, y, z]` points per triangle.
    #[serde(default)]
    pub triangles: Vec<Vec<Vec<f64>>>,
}

impl SceneDocument {
    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Validate into a camera and scene.
    pub fn build(&self) -> asp_math::Result<(Camera, Scene)> {
        let camera = self.camera.build()?;
        let scene = Scene::from_vertex_lists(&self.triangles)?;
        Ok((camera, scene))
    }
}

/// Serialized image: dimensions plus rows of pixel values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOutput<T> {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Pixel values, row by row.
    pub rows: Vec<Vec<T>>,
}

impl<T: Clone> From<&Grid<T>> for ImageOutput<T> {
    fn from(grid: &Grid<T>) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            rows: grid.to_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asp_math::GeometryError;

    const DOC: &str = r#"{
        "camera": {
            "orientation": { "position": [0, 0, 0], "direction": [0, 0, 1] },
            "focal_length": 1.0,
            "array_size": [1, 1],
            "pixel_size": [1.0, 1.0]
        },
        "triangles": [
            [[-10, -10, 5], [10, -10, 5], [0, 10, 5]]
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let doc = SceneDocument::from_json(DOC).unwrap();
        let (camera, scene) = doc.build().unwrap();
        assert_eq!(camera.array_size(), [1, 1]);
        assert_eq!(scene.len(), 1);

        let image = asp_raytrace::snapshot(&camera, scene.triangles()).unwrap();
        let output = ImageOutput::from(&image);
        assert_eq!(output.rows, vec![vec![1]]);
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"width":1,"height":1,"rows":[[1]]}"#
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = SceneDocument::from_json(DOC).unwrap();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert_eq!(SceneDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_missing_triangles_is_empty_scene() {
        let doc = SceneDocument::from_json(
            r#"{ "camera": {
                "orientation": { "position": [0, 0, 0], "direction": [1, 0, 0] },
                "focal_length": 0.05, "array_size": [2, 3], "pixel_size": [0.001, 0.001]
            } }"#,
        )
        .unwrap();
        let (_, scene) = doc.build().unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_four_point_triangle_rejected() {
        let mut doc = SceneDocument::from_json(DOC).unwrap();
        doc.triangles[0].push(vec![1.0, 1.0, 1.0]);
        assert!(matches!(doc.build(), Err(GeometryError::InvalidArgument(_))));
    }

    #[test]
    fn test_bad_focal_length_rejected() {
        let mut doc = SceneDocument::from_json(DOC).unwrap();
        doc.camera.focal_length = -1.0;
        assert!(matches!(doc.build(), Err(GeometryError::InvalidArgument(_))));
    }
}

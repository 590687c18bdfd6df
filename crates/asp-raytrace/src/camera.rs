//! Pinhole camera and detector ray generation.

use asp_math::{rotation_matrix, vec3_from_slice, GeometryError, Point, Ray, Result, Vec3, Vector};
use serde::{Deserialize, Serialize};

/// A pinhole camera with a rectangular detector behind its optical center.
///
/// The detector frame looks down +Z; [`Camera::rays`] rotates that frame onto
/// the orientation's direction. Lengths share one unit (e.g. meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    orientation: Vector,
    focal_length: f64,
    array_size: [usize; 2],
    pixel_size: [f64; 2],
}

impl Camera {
    /// Create a camera.
    ///
    /// - `orientation` - optical center and pointing direction
    /// - `focal_length` - distance from optical center to the detector plane
    /// - `array_size` - pixel counts along detector x and y
    /// - `pixel_size` - pixel pitch along detector x and y
    ///
    /// Fails with an invalid argument error if the focal length, a pixel
    /// count or a pixel size is not positive.
    pub fn new(
        orientation: Vector,
        focal_length: f64,
        array_size: [usize; 2],
        pixel_size: [f64; 2],
    ) -> Result<Self> {
        let camera = Self {
            orientation,
            focal_length,
            array_size,
            pixel_size,
        };
        camera.validate()?;
        Ok(camera)
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(GeometryError::InvalidArgument(format!(
                "focal length must be positive, got {}",
                self.focal_length
            )));
        }
        if self.array_size.contains(&0) {
            return Err(GeometryError::InvalidArgument(format!(
                "array size must be positive, got {:?}",
                self.array_size
            )));
        }
        if self.pixel_size.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(GeometryError::InvalidArgument(format!(
                "pixel size must be positive, got {:?}",
                self.pixel_size
            )));
        }
        Ok(())
    }

    /// Direction the detector frame looks along before rotation.
    pub fn optical_axis() -> Vec3 {
        Vec3::z()
    }

    /// Optical center and pointing direction.
    pub fn orientation(&self) -> &Vector {
        &self.orientation
    }

    /// Focal length.
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Pixel counts `[nx, ny]`.
    pub fn array_size(&self) -> [usize; 2] {
        self.array_size
    }

    /// Pixel pitch `[px, py]`.
    pub fn pixel_size(&self) -> [f64; 2] {
        self.pixel_size
    }

    /// Total number of detector pixels.
    pub fn pixel_count(&self) -> usize {
        self.array_size[0] * self.array_size[1]
    }

    /// Physical detector extent `[nx·px, ny·py]`.
    pub fn detector_size(&self) -> [f64; 2] {
        [
            self.array_size[0] as f64 * self.pixel_size[0],
            self.array_size[1] as f64 * self.pixel_size[1],
        ]
    }

    /// One ray per detector pixel, in row-major order (`k = iy * nx + ix`).
    ///
    /// Pixel `(ix, iy)` sits at `(−w/2 + (ix + ½)·px, −h/2 + (iy + ½)·py, f)` in
    /// the detector frame. Each ray starts at the optical center and passes
    /// through its pixel center, so the parameter `t = 1` lands on the detector
    /// plane. Directions are rotated from [`Camera::optical_axis`] onto the
    /// camera's pointing direction.
    ///
    /// Fails with a degenerate geometry error if the pointing direction has zero length.
    pub fn rays(&self) -> Result<Vec<Ray>> {
        let rotation = rotation_matrix(&Self::optical_axis(), self.orientation.direction())?;
        let [nx, ny] = self.array_size;
        let [px, py] = self.pixel_size;
        let [width, height] = self.detector_size();
        let origin = *self.orientation.position();
        let focal = self.focal_length;

        let rays = (0..ny)
            .flat_map(|iy| {
                let y = -height / 2.0 + (iy as f64 + 0.5) * py;
                (0..nx).map(move |ix| {
                    let x = -width / 2.0 + (ix as f64 + 0.5) * px;
                    Ray::new(origin, rotation * Vec3::new(x, y, focal))
                })
            })
            .collect();
        Ok(rays)
    }

    /// Serializable form of this camera.
    pub fn to_config(&self) -> CameraConfig {
        let p = self.orientation.position().xyz();
        let d = self.orientation.direction();
        CameraConfig {
            orientation: OrientationConfig {
                position: vec![p.x, p.y, p.z],
                direction: vec![d.x, d.y, d.z],
            },
            focal_length: self.focal_length,
            array_size: self.array_size,
            pixel_size: self.pixel_size,
        }
    }
}

/// Serialized camera position and pointing direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientationConfig {
    /// Optical center `[x, y, z]`.
    pub position: Vec<f64>,
    /// Pointing direction `[x, y, z]`.
    pub direction: Vec<f64>,
}

/// Serialized camera configuration.
///
/// Coordinates are kept as plain lists so that wrong lengths surface as
/// dimension errors from [`CameraConfig::build`] instead of parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Optical center and pointing direction.
    pub orientation: OrientationConfig,
    /// Focal length.
    pub focal_length: f64,
    /// Pixel counts `[nx, ny]`.
    pub array_size: [usize; 2],
    /// Pixel pitch `[px, py]`.
    pub pixel_size: [f64; 2],
}

impl CameraConfig {
    /// Validate and convert into a [`Camera`].
    pub fn build(&self) -> Result<Camera> {
        let orientation = Vector::new(
            Point::from_slice(&self.orientation.position)?,
            vec3_from_slice(&self.orientation.direction)?,
        );
        Camera::new(
            orientation,
            self.focal_length,
            self.array_size,
            self.pixel_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera(direction: Vec3, array_size: [usize; 2], pixel_size: [f64; 2]) -> Camera {
        Camera::new(
            Vector::new(Point::new(1.0, 2.0, 3.0), direction),
            2.0,
            array_size,
            pixel_size,
        )
        .unwrap()
    }

    #[test]
    fn test_ray_count() {
        let cam = camera(Vec3::z(), [4, 3], [0.5, 0.5]);
        assert_eq!(cam.rays().unwrap().len(), 12);
        assert_eq!(cam.pixel_count(), 12);
    }

    #[test]
    fn test_single_pixel_along_axis() {
        let cam = camera(Vec3::new(0.0, 0.0, 3.0), [1, 1], [1.0, 1.0]);
        let rays = cam.rays().unwrap();
        assert_eq!(rays.len(), 1);
        assert_eq!(*rays[0].origin(), Point::new(1.0, 2.0, 3.0));
        assert_relative_eq!(*rays[0].direction(), Vec3::new(0.0, 0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_pixel_centers_row_major() {
        let cam = camera(Vec3::z(), [2, 2], [1.0, 1.0]);
        let dirs: Vec<Vec3> = cam.rays().unwrap().iter().map(|r| *r.direction()).collect();
        let expected = [
            Vec3::new(-0.5, -0.5, 2.0),
            Vec3::new(0.5, -0.5, 2.0),
            Vec3::new(-0.5, 0.5, 2.0),
            Vec3::new(0.5, 0.5, 2.0),
        ];
        for (d, e) in dirs.iter().zip(expected.iter()) {
            assert_relative_eq!(*d, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rays_follow_pointing_direction() {
        let cam = camera(Vec3::x(), [3, 3], [0.1, 0.1]);
        let rays = cam.rays().unwrap();
        // Center pixel looks straight down the pointing direction
        assert_relative_eq!(rays[4].direction().normalize(), Vec3::x(), epsilon = 1e-12);
        for ray in &rays {
            assert!(ray.direction().dot(&Vec3::x()) > 0.0);
            assert!((ray.direction().dot(&Vec3::x()) - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rays_pointing_backward() {
        let cam = camera(-Vec3::z(), [1, 1], [1.0, 1.0]);
        let rays = cam.rays().unwrap();
        assert_relative_eq!(*rays[0].direction(), Vec3::new(0.0, 0.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_direction() {
        let cam = camera(Vec3::zeros(), [1, 1], [1.0, 1.0]);
        assert!(matches!(cam.rays(), Err(GeometryError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_invalid_configuration() {
        let orient = Vector::new(Point::origin(), Vec3::z());
        assert!(Camera::new(orient, 0.0, [1, 1], [1.0, 1.0]).is_err());
        assert!(Camera::new(orient, f64::NAN, [1, 1], [1.0, 1.0]).is_err());
        assert!(Camera::new(orient, 1.0, [0, 1], [1.0, 1.0]).is_err());
        assert!(Camera::new(orient, 1.0, [1, 1], [1.0, -1.0]).is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let cam = camera(Vec3::new(0.0, 1.0, 1.0), [8, 6], [0.01, 0.02]);
        let json = serde_json::to_string(&cam.to_config()).unwrap();
        let config: CameraConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.build().unwrap(), cam);
    }

    #[test]
    fn test_config_bad_dimension() {
        let config: CameraConfig = serde_json::from_str(
            r#"{
                "orientation": { "position": [0, 0], "direction": [0, 0, 1] },
                "focal_length": 1.0,
                "array_size": [1, 1],
                "pixel_size": [1.0, 1.0]
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.build(),
            Err(GeometryError::Dimension {
                expected: 3,
                actual: 2
            })
        );
    }
}

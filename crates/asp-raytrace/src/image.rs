//! Row-major pixel grids.

use asp_math::{GeometryError, Result};

/// A `width` × `height` grid stored row by row.
///
/// Row `iy`, column `ix` holds element `iy * width + ix`, matching the
/// order of [`crate::Camera::rays`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Binary occupancy image: 1 where a ray hit the scene, 0 elsewhere.
pub type OccupancyImage = Grid<u8>;

/// Nearest hit parameter per pixel, `None` where nothing was hit.
pub type DepthImage = Grid<Option<f64>>;

impl<T> Grid<T> {
    /// Wrap row-major `data` as a grid.
    ///
    /// Fails with an invalid argument error if `data` does not hold exactly
    /// `width * height` elements.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(GeometryError::InvalidArgument(format!(
                "{} elements cannot fill a {width}x{height} grid",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Element at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// All elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width.max(1))
    }

    /// Number of elements matching `pred`.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.data.iter().filter(|v| pred(*v)).count()
    }
}

impl<T: Clone> Grid<T> {
    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl Grid<u8> {
    /// Render as text, one line per row: `#` for hits and `.` for misses.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|&v| if v != 0 { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

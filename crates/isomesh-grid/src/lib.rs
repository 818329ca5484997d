//! Scalar field boundary for isomesh-rs.
//!
//! The extractor reads its input through [`ScalarField`]: per-axis extents
//! plus sample access by three integer coordinates. [`DenseGrid`] is the
//! one concrete implementation: a C-contiguous, bounds-checked 3-D array of
//! `f64` samples. There is deliberately no dimension-generic array-view
//! machinery here; the classifier is inherently three-dimensional.

#![allow(clippy::must_use_candidate)]

mod error;

pub use error::{GridError, Result};

use serde::{Deserialize, Serialize};

/// A read-only 3-D scalar field.
///
/// Implementations must be pure: repeated calls with the same coordinates
/// return the same sample for the duration of an extraction.
pub trait ScalarField {
    /// Number of samples along each axis.
    fn shape(&self) -> [usize; 3];

    /// The sample at `(x, y, z)`.
    ///
    /// # Panics
    /// Out-of-range coordinates are a programming error and panic.
    fn value(&self, x: usize, y: usize, z: usize) -> f64;
}

/// An owned dense grid of `f64` samples in C-contiguous layout: the sample
/// at `(x, y, z)` lives at index `(x * ny + y) * nz + z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseGrid {
    shape: [usize; 3],
    data: Vec<f64>,
}

impl DenseGrid {
    /// Creates a zero-filled grid.
    pub fn zeros(shape: [usize; 3]) -> Self {
        Self {
            shape,
            data: vec![0.0; shape[0] * shape[1] * shape[2]],
        }
    }

    /// Wraps an existing sample vector.
    ///
    /// # Errors
    /// Returns [`GridError::SizeMismatch`] when `data.len()` does not equal
    /// the product of the shape.
    pub fn from_vec(shape: [usize; 3], data: Vec<f64>) -> Result<Self> {
        let expected = shape[0] * shape[1] * shape[2];
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Fills a grid from a closure over coordinates.
    pub fn from_fn(shape: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> f64) -> Self {
        let mut grid = Self::zeros(shape);
        for x in 0..shape[0] {
            for y in 0..shape[1] {
                for z in 0..shape[2] {
                    let idx = grid.offset(x, y, z);
                    grid.data[idx] = f(x, y, z);
                }
            }
        }
        grid
    }

    /// The sample at `(x, y, z)`, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        if x < self.shape[0] && y < self.shape[1] && z < self.shape[2] {
            Some(self.data[self.offset(x, y, z)])
        } else {
            None
        }
    }

    /// Overwrites the sample at `(x, y, z)`.
    ///
    /// # Panics
    /// Panics when the coordinates are out of range.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f64) {
        self.check_bounds(x, y, z);
        let idx = self.offset(x, y, z);
        self.data[idx] = value;
    }

    /// The underlying samples in C-contiguous order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.shape[1] + y) * self.shape[2] + z
    }

    fn check_bounds(&self, x: usize, y: usize, z: usize) {
        assert!(
            x < self.shape[0] && y < self.shape[1] && z < self.shape[2],
            "grid index ({x}, {y}, {z}) out of range for shape {:?}",
            self.shape
        );
    }
}

impl ScalarField for DenseGrid {
    fn shape(&self) -> [usize; 3] {
        self.shape
    }

    fn value(&self, x: usize, y: usize, z: usize) -> f64 {
        self.check_bounds(x, y, z);
        self.data[self.offset(x, y, z)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_size() {
        assert!(DenseGrid::from_vec([2, 3, 4], vec![0.0; 24]).is_ok());
        let err = DenseGrid::from_vec([2, 3, 4], vec![0.0; 10]).unwrap_err();
        assert!(matches!(
            err,
            GridError::SizeMismatch {
                expected: 24,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_from_fn_and_layout() {
        let grid = DenseGrid::from_fn([3, 4, 5], |x, y, z| (x * 100 + y * 10 + z) as f64);
        assert_eq!(grid.value(2, 3, 4), 234.0);
        assert_eq!(grid.value(0, 0, 0), 0.0);
        // C-contiguous: z varies fastest
        assert_eq!(grid.as_slice()[1], 1.0);
        assert_eq!(grid.as_slice()[5], 10.0);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let grid = DenseGrid::zeros([2, 2, 2]);
        assert_eq!(grid.get(1, 1, 1), Some(0.0));
        assert_eq!(grid.get(2, 0, 0), None);
        assert_eq!(grid.get(0, 0, 5), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_value_out_of_range_panics() {
        let grid = DenseGrid::zeros([2, 2, 2]);
        let _ = grid.value(0, 2, 0);
    }

    #[test]
    fn test_set_then_read_back() {
        let mut grid = DenseGrid::zeros([4, 4, 4]);
        grid.set(1, 2, 3, -7.5);
        assert_eq!(grid.value(1, 2, 3), -7.5);
        assert_eq!(grid.value(3, 2, 1), 0.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = DenseGrid::from_fn([2, 2, 2], |x, _, _| x as f64);
        let json = serde_json::to_string(&grid).unwrap();
        let back: DenseGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}

//! Weight arrays for rational curves and surfaces.

use bezmat_core::traits::Shape;
use bezmat_core::{BezmatError, Result};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{PointArray, PointGrid};

/// One weight per curve control point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightArray {
    data: DVector<f64>,
}

impl WeightArray {
    pub fn new(weights: Vec<f64>) -> Self {
        Self {
            data: DVector::from_vec(weights),
        }
    }

    /// `len` weights, all equal to `1.0`.
    pub fn uniform(len: usize) -> Self {
        Self {
            data: DVector::from_element(len, 1.0),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> f64 {
        self.data[i]
    }

    pub fn as_vector(&self) -> &DVector<f64> {
        &self.data
    }

    /// Require exactly one weight per control point.
    pub fn check_matches(&self, points: &PointArray) -> Result<()> {
        if self.len() != points.len() {
            return Err(BezmatError::shape_mismatch(
                format!("{} weights", points.len()),
                format!("{} weights", self.len()),
            ));
        }
        check_finite(self.data.iter())
    }
}

impl From<Vec<f64>> for WeightArray {
    fn from(weights: Vec<f64>) -> Self {
        Self::new(weights)
    }
}

impl Shape for WeightArray {
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }
}

/// One weight per surface grid cell, `rows x cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightGrid {
    data: DMatrix<f64>,
}

impl WeightGrid {
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(BezmatError::invalid_shape(format!(
                "weight row {} has {} entries, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        Ok(Self {
            data: DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]),
        })
    }

    pub fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    pub fn uniform(rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::from_element(rows, cols, 1.0),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[(i, j)]
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Require exactly one weight per grid cell.
    pub fn check_matches(&self, grid: &PointGrid) -> Result<()> {
        if (self.rows(), self.cols()) != (grid.rows(), grid.cols()) {
            return Err(BezmatError::shape_mismatch(
                format!("{}x{} weights", grid.rows(), grid.cols()),
                format!("{}x{} weights", self.rows(), self.cols()),
            ));
        }
        check_finite(self.data.iter())
    }
}

/// Every weight must be finite.
fn check_finite<'a>(weights: impl Iterator<Item = &'a f64>) -> Result<()> {
    for (i, w) in weights.enumerate() {
        if !w.is_finite() {
            return Err(BezmatError::InvalidParameter(format!(
                "weight {} is not finite: {}",
                i, w
            )));
        }
    }
    Ok(())
}

impl Shape for WeightGrid {
    fn shape(&self) -> Vec<usize> {
        vec![self.rows(), self.cols()]
    }
}

//! Rank-3 point grids: surface control nets and evaluated surfaces.

use bezmat_core::traits::{Shape, Validate};
use bezmat_core::{BezmatError, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::Point3;

/// A `rows x cols` grid of `D`-dimensional points.
///
/// `layers[i]` holds the `cols x D` points of u-index `i`, so the point at
/// `(i, j)` is row `j` of layer `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGrid {
    layers: Vec<DMatrix<f64>>,
}

impl PointGrid {
    /// Build from `grid[i][j][k]` (u-index, v-index, coordinate).
    pub fn from_nested(grid: &[Vec<Vec<f64>>]) -> Result<Self> {
        let first_row = grid
            .first()
            .ok_or_else(|| BezmatError::invalid_shape("point grid has no rows"))?;
        let cols = first_row.len();
        let dim = first_row.first().map_or(0, Vec::len);

        for (i, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(BezmatError::invalid_shape(format!(
                    "grid row {} has {} points, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            if let Some((j, p)) = row.iter().enumerate().find(|(_, p)| p.len() != dim) {
                return Err(BezmatError::invalid_shape(format!(
                    "grid point ({}, {}) has {} coordinates, expected {}",
                    i,
                    j,
                    p.len(),
                    dim
                )));
            }
        }

        let layers = grid
            .iter()
            .map(|row| DMatrix::from_fn(cols, dim, |j, k| row[j][k]))
            .collect();
        Self::from_layers(layers)
    }

    /// Build from one `cols x D` matrix per u-index.
    pub fn from_layers(layers: Vec<DMatrix<f64>>) -> Result<Self> {
        let grid = Self { layers };
        grid.validate()?;
        Ok(grid)
    }

    pub fn from_points3(grid: &[Vec<Point3>]) -> Result<Self> {
        let nested: Vec<Vec<Vec<f64>>> = grid
            .iter()
            .map(|row| row.iter().map(|p| p.to_array().to_vec()).collect())
            .collect();
        Self::from_nested(&nested)
    }

    pub fn zeros(rows: usize, cols: usize, dim: usize) -> Self {
        Self {
            layers: vec![DMatrix::zeros(cols, dim); rows],
        }
    }

    /// Number of points along u.
    pub fn rows(&self) -> usize {
        self.layers.len()
    }

    /// Number of points along v.
    pub fn cols(&self) -> usize {
        self.layers.first().map_or(0, |m| m.nrows())
    }

    pub fn dim(&self) -> usize {
        self.layers.first().map_or(0, |m| m.ncols())
    }

    pub fn degree_u(&self) -> usize {
        self.rows().saturating_sub(1)
    }

    pub fn degree_v(&self) -> usize {
        self.cols().saturating_sub(1)
    }

    pub fn point(&self, i: usize, j: usize) -> Vec<f64> {
        self.layers[i].row(j).iter().copied().collect()
    }

    pub fn layer(&self, i: usize) -> &DMatrix<f64> {
        &self.layers[i]
    }

    pub fn layers(&self) -> &[DMatrix<f64>] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<DMatrix<f64>> {
        self.layers
    }

    pub fn to_nested(&self) -> Vec<Vec<Vec<f64>>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.point(i, j)).collect())
            .collect()
    }

    pub fn to_points3(&self) -> Option<Vec<Vec<Point3>>> {
        (self.dim() == 3).then(|| {
            self.layers
                .iter()
                .map(|m| {
                    (0..m.nrows())
                        .map(|j| Point3::new(m[(j, 0)], m[(j, 1)], m[(j, 2)]))
                        .collect()
                })
                .collect()
        })
    }
}

impl From<Vec<DMatrix<f64>>> for PointGrid {
    fn from(layers: Vec<DMatrix<f64>>) -> Self {
        Self { layers }
    }
}

impl Validate for PointGrid {
    fn validate(&self) -> Result<()> {
        let first = self
            .layers
            .first()
            .ok_or_else(|| BezmatError::invalid_shape("point grid has no rows"))?;
        if first.nrows() == 0 {
            return Err(BezmatError::invalid_shape("point grid has no columns"));
        }
        if first.ncols() == 0 {
            return Err(BezmatError::invalid_shape("grid points have zero coordinates"));
        }
        let expected = first.shape();
        if let Some((i, m)) = self.layers.iter().enumerate().find(|(_, m)| m.shape() != expected) {
            return Err(BezmatError::invalid_shape(format!(
                "grid row {} has shape {:?}, expected {:?}",
                i,
                m.shape(),
                expected
            )));
        }
        Ok(())
    }
}

impl Shape for PointGrid {
    fn shape(&self) -> Vec<usize> {
        vec![self.rows(), self.cols(), self.dim()]
    }
}

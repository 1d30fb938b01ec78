//! Rank-2 point arrays: control polygons and evaluated curves.

use bezmat_core::traits::{Shape, Validate};
use bezmat_core::{BezmatError, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::{Point2, Point3};

/// An ordered sequence of `D`-dimensional points, one per matrix row.
///
/// Used both for curve control points (`(n + 1) x D`) and for evaluation
/// results (`nt x D`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointArray {
    data: DMatrix<f64>,
}

impl PointArray {
    /// Build from nested rows, rejecting empty input and ragged rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| BezmatError::invalid_shape("point array has no points"))?;
        let dim = first.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(BezmatError::invalid_shape(format!(
                "point {} has {} coordinates, expected {}",
                i,
                row.len(),
                dim
            )));
        }
        let data = DMatrix::from_fn(rows.len(), dim, |i, j| rows[i][j]);
        Self::from_matrix(data)
    }

    /// Wrap a matrix whose rows are points.
    pub fn from_matrix(data: DMatrix<f64>) -> Result<Self> {
        let points = Self { data };
        points.validate()?;
        Ok(points)
    }

    pub fn from_points2(points: &[Point2]) -> Result<Self> {
        Self::from_matrix(DMatrix::from_fn(points.len(), 2, |i, j| points[i][j]))
    }

    pub fn from_points3(points: &[Point3]) -> Result<Self> {
        Self::from_matrix(DMatrix::from_fn(points.len(), 3, |i, j| points[i][j]))
    }

    pub fn zeros(len: usize, dim: usize) -> Self {
        Self {
            data: DMatrix::zeros(len, dim),
        }
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Number of coordinates per point.
    pub fn dim(&self) -> usize {
        self.data.ncols()
    }

    /// Polynomial degree implied by the point count (`len - 1`).
    pub fn degree(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn point(&self, i: usize) -> Vec<f64> {
        self.data.row(i).iter().copied().collect()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.len()).map(|i| self.point(i)).collect()
    }

    pub fn to_points2(&self) -> Option<Vec<Point2>> {
        (self.dim() == 2).then(|| {
            (0..self.len())
                .map(|i| Point2::new(self.data[(i, 0)], self.data[(i, 1)]))
                .collect()
        })
    }

    pub fn to_points3(&self) -> Option<Vec<Point3>> {
        (self.dim() == 3).then(|| {
            (0..self.len())
                .map(|i| Point3::new(self.data[(i, 0)], self.data[(i, 1)], self.data[(i, 2)]))
                .collect()
        })
    }

    /// True when every coordinate is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }
}

impl From<DMatrix<f64>> for PointArray {
    fn from(data: DMatrix<f64>) -> Self {
        Self { data }
    }
}

impl Validate for PointArray {
    fn validate(&self) -> Result<()> {
        if self.data.nrows() == 0 {
            return Err(BezmatError::invalid_shape("point array has no points"));
        }
        if self.data.ncols() == 0 {
            return Err(BezmatError::invalid_shape("points have zero coordinates"));
        }
        Ok(())
    }
}

impl Shape for PointArray {
    fn shape(&self) -> Vec<usize> {
        vec![self.len(), self.dim()]
    }
}

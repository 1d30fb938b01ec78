//! Parameter grids and power-basis helpers.

use bezmat_core::{BezmatError, Result};
use nalgebra::DMatrix;

/// `count` evenly spaced values over `[0, 1]`, both ends included.
///
/// A single sample yields `[0.0]`; zero samples is an error.
pub fn linspace(count: usize) -> Result<Vec<f64>> {
    match count {
        0 => Err(BezmatError::invalid_shape("sample count must be at least 1")),
        1 => Ok(vec![0.0]),
        _ => {
            let last = (count - 1) as f64;
            Ok((0..count).map(|i| i as f64 / last).collect())
        }
    }
}

/// Power-basis matrix for `degree`: row `k` holds `t^(degree - k)` for every
/// sample, so the shape is `(degree + 1) x t.len()`. `0^0` evaluates to 1.
pub fn power_matrix(degree: usize, t: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(degree + 1, t.len(), |k, s| t[s].powi((degree - k) as i32))
}

/// The `order`-th forward difference of the rows of `points`.
///
/// The result has `nrows - order` rows (zero rows once `order >= nrows`).
pub fn forward_difference(points: &DMatrix<f64>, order: usize) -> DMatrix<f64> {
    let mut diff = points.clone();
    for _ in 0..order {
        let n = diff.nrows();
        if n <= 1 {
            return DMatrix::zeros(0, diff.ncols());
        }
        let next = &diff.rows(1, n - 1) - &diff.rows(0, n - 1);
        diff = next;
    }
    diff
}

/// The `order`-th forward difference across a sequence of equally shaped
/// matrices (the u-direction of a point grid).
pub fn forward_difference_layers(layers: &[DMatrix<f64>], order: usize) -> Vec<DMatrix<f64>> {
    let mut diff = layers.to_vec();
    for _ in 0..order {
        diff = diff.windows(2).map(|w| &w[1] - &w[0]).collect();
    }
    diff
}

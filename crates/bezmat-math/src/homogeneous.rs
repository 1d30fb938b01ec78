//! Homogeneous coordinates for rational evaluation.
//!
//! A `D`-dimensional point `p` with weight `w` maps to the `D + 1`
//! dimensional point `(w * p, w)`. After polynomial evaluation, the first `D`
//! coordinates are divided by the last one to project back.

use bezmat_core::{BezmatError, DegenerateWeightPolicy, Result};
use nalgebra::DMatrix;

use crate::{PointArray, PointGrid, WeightArray, WeightGrid};

/// Lift weighted control points into homogeneous space.
pub fn homogenize_points(points: &PointArray, weights: &WeightArray) -> Result<PointArray> {
    weights.check_matches(points)?;
    let dim = points.dim();
    let src = points.as_matrix();
    let lifted = DMatrix::from_fn(points.len(), dim + 1, |i, k| {
        let w = weights.get(i);
        if k == dim {
            w
        } else {
            src[(i, k)] * w
        }
    });
    Ok(PointArray::from(lifted))
}

/// Lift a weighted control net into homogeneous space.
pub fn homogenize_grid(grid: &PointGrid, weights: &WeightGrid) -> Result<PointGrid> {
    weights.check_matches(grid)?;
    let dim = grid.dim();
    let layers: Vec<DMatrix<f64>> = grid
        .layers()
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            DMatrix::from_fn(layer.nrows(), dim + 1, |j, k| {
                let w = weights.get(i, j);
                if k == dim {
                    w
                } else {
                    layer[(j, k)] * w
                }
            })
        })
        .collect();
    Ok(PointGrid::from(layers))
}

/// Divide each row by its trailing coordinate, dropping that coordinate.
///
/// `offset` is added to reported sample indices so grid layers can report
/// flattened `i * cols + j` positions.
fn project_rows(
    lifted: &DMatrix<f64>,
    policy: DegenerateWeightPolicy,
    offset: usize,
) -> Result<DMatrix<f64>> {
    let dim = lifted.ncols().saturating_sub(1);
    let mut degenerate = 0usize;
    for s in 0..lifted.nrows() {
        if lifted[(s, dim)] == 0.0 {
            match policy {
                DegenerateWeightPolicy::Error => {
                    return Err(BezmatError::DegenerateWeight { sample: offset + s });
                }
                DegenerateWeightPolicy::Propagate => degenerate += 1,
            }
        }
    }
    if degenerate > 0 {
        log::warn!(
            "{} samples have a zero homogeneous divisor; propagating non-finite values",
            degenerate
        );
    }
    Ok(DMatrix::from_fn(lifted.nrows(), dim, |s, k| {
        lifted[(s, k)] / lifted[(s, dim)]
    }))
}

/// Project homogeneous curve samples back to Cartesian space.
pub fn project_points(lifted: &PointArray, policy: DegenerateWeightPolicy) -> Result<PointArray> {
    project_rows(lifted.as_matrix(), policy, 0).map(PointArray::from)
}

/// Project homogeneous surface samples back to Cartesian space.
///
/// A zero divisor at grid sample `(i, j)` is reported as `i * cols + j`.
pub fn project_grid(lifted: &PointGrid, policy: DegenerateWeightPolicy) -> Result<PointGrid> {
    let cols = lifted.cols();
    lifted
        .layers()
        .iter()
        .enumerate()
        .map(|(i, layer)| project_rows(layer, policy, i * cols))
        .collect::<Result<Vec<_>>>()
        .map(PointGrid::from)
}

//! Parallel evaluation of many independent curves or surfaces.
//!
//! Evaluations share nothing but the read-only coefficient cache, so each
//! input runs on the rayon pool without extra coordination. Results keep
//! input order; if any input fails, the batch returns one of the errors.

use bezmat_core::Result;
use bezmat_math::{PointArray, PointGrid, WeightArray};
use rayon::prelude::*;

use crate::coefficient::CoefficientCache;
use crate::curve::{curve_derivative_with, GridCurve};
use crate::rational::rational_curve_eval_with;
use crate::surface::{surface_eval_with, GridSurface};

pub fn curve_derivative_batch_with(
    cache: &CoefficientCache,
    curves: &[PointArray],
    nt: usize,
    order: usize,
) -> Result<Vec<PointArray>> {
    log::debug!("evaluating batch of {} curves, order {}", curves.len(), order);
    curves
        .par_iter()
        .map(|points| curve_derivative_with(cache, points, nt, order))
        .collect()
}

/// Evaluate the `order`-th derivative of every curve at `nt` parameters.
pub fn curve_derivative_batch(curves: &[PointArray], nt: usize, order: usize) -> Result<Vec<PointArray>> {
    curve_derivative_batch_with(CoefficientCache::global(), curves, nt, order)
}

pub fn curve_eval_batch(curves: &[PointArray], nt: usize) -> Result<Vec<PointArray>> {
    curve_derivative_batch(curves, nt, 0)
}

/// Evaluate rational curves given as `(points, weights)` pairs.
pub fn rational_curve_eval_batch_with(
    cache: &CoefficientCache,
    curves: &[(PointArray, WeightArray)],
    nt: usize,
) -> Result<Vec<PointArray>> {
    log::debug!("evaluating batch of {} rational curves", curves.len());
    curves
        .par_iter()
        .map(|(points, weights)| rational_curve_eval_with(cache, points, weights, nt))
        .collect()
}

pub fn rational_curve_eval_batch(
    curves: &[(PointArray, WeightArray)],
    nt: usize,
) -> Result<Vec<PointArray>> {
    rational_curve_eval_batch_with(CoefficientCache::global(), curves, nt)
}

pub fn surface_eval_batch_with(
    cache: &CoefficientCache,
    surfaces: &[PointGrid],
    nu: usize,
    nv: usize,
) -> Result<Vec<PointGrid>> {
    log::debug!("evaluating batch of {} surfaces", surfaces.len());
    surfaces
        .par_iter()
        .map(|grid| surface_eval_with(cache, grid, nu, nv))
        .collect()
}

pub fn surface_eval_batch(surfaces: &[PointGrid], nu: usize, nv: usize) -> Result<Vec<PointGrid>> {
    surface_eval_batch_with(CoefficientCache::global(), surfaces, nu, nv)
}

/// Sample every curve on the same `nt`-point grid.
pub fn eval_curves<C: GridCurve>(curves: &[C], nt: usize) -> Result<Vec<PointArray>> {
    curves.par_iter().map(|c| c.eval_grid(nt)).collect()
}

/// Sample every surface on the same `nu x nv` grid.
pub fn eval_surfaces<S: GridSurface>(surfaces: &[S], nu: usize, nv: usize) -> Result<Vec<PointGrid>> {
    surfaces.par_iter().map(|s| s.eval_grid(nu, nv)).collect()
}

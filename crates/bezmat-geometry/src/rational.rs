//! Rational Bezier evaluation through homogeneous coordinates.
//!
//! Weighted control points are lifted to `(w * p, w)`, evaluated with the
//! polynomial evaluators unchanged, and projected back by dividing by the
//! trailing coordinate. A zero divisor is handled according to the cache's
//! [`DegenerateWeightPolicy`](bezmat_core::DegenerateWeightPolicy).

use bezmat_core::traits::Validate;
use bezmat_core::Result;
use bezmat_math::homogeneous::{homogenize_grid, homogenize_points, project_grid, project_points};
use bezmat_math::power::linspace;
use bezmat_math::{PointArray, PointGrid, WeightArray, WeightGrid};

use crate::coefficient::CoefficientCache;
use crate::curve::evaluate_curve_with;
use crate::surface::evaluate_surface_with;

pub fn evaluate_rational_curve_with(
    cache: &CoefficientCache,
    points: &PointArray,
    weights: &WeightArray,
    t: &[f64],
) -> Result<PointArray> {
    points.validate()?;
    let lifted = homogenize_points(points, weights)?;
    let evaluated = evaluate_curve_with(cache, &lifted, t, 0)?;
    project_points(&evaluated, cache.config().degenerate_weights)
}

/// Rational curve points at arbitrary parameters.
pub fn evaluate_rational_curve(
    points: &PointArray,
    weights: &WeightArray,
    t: &[f64],
) -> Result<PointArray> {
    evaluate_rational_curve_with(CoefficientCache::global(), points, weights, t)
}

pub fn rational_curve_eval_with(
    cache: &CoefficientCache,
    points: &PointArray,
    weights: &WeightArray,
    nt: usize,
) -> Result<PointArray> {
    evaluate_rational_curve_with(cache, points, weights, &linspace(nt)?)
}

/// Rational curve points at `nt` evenly spaced parameters, shape `nt x D`.
pub fn rational_curve_eval(points: &PointArray, weights: &WeightArray, nt: usize) -> Result<PointArray> {
    rational_curve_eval_with(CoefficientCache::global(), points, weights, nt)
}

pub fn evaluate_rational_surface_with(
    cache: &CoefficientCache,
    grid: &PointGrid,
    weights: &WeightGrid,
    u: &[f64],
    v: &[f64],
) -> Result<PointGrid> {
    grid.validate()?;
    let lifted = homogenize_grid(grid, weights)?;
    let evaluated = evaluate_surface_with(cache, &lifted, u, v, 0, 0)?;
    project_grid(&evaluated, cache.config().degenerate_weights)
}

/// Rational surface points on the tensor grid `u x v`.
pub fn evaluate_rational_surface(
    grid: &PointGrid,
    weights: &WeightGrid,
    u: &[f64],
    v: &[f64],
) -> Result<PointGrid> {
    evaluate_rational_surface_with(CoefficientCache::global(), grid, weights, u, v)
}

pub fn rational_surface_eval_with(
    cache: &CoefficientCache,
    grid: &PointGrid,
    weights: &WeightGrid,
    nu: usize,
    nv: usize,
) -> Result<PointGrid> {
    evaluate_rational_surface_with(cache, grid, weights, &linspace(nu)?, &linspace(nv)?)
}

/// Rational surface points on an `nu x nv` uniform grid, shape `nu x nv x D`.
pub fn rational_surface_eval(
    grid: &PointGrid,
    weights: &WeightGrid,
    nu: usize,
    nv: usize,
) -> Result<PointGrid> {
    rational_surface_eval_with(CoefficientCache::global(), grid, weights, nu, nv)
}

//! Tensor-product Bezier surface evaluation on parameter grids.
//!
//! With `Bu = Pu^T * M(n)` and `Bv = Pv^T * M(m)`, the net is contracted
//! against `Bv` along v first, then against `Bu` along u, giving an
//! `nu x nv x D` grid. Partial derivatives substitute forward differences
//! and reduced-degree matrices per axis.

mod bezier;

use bezmat_core::traits::Validate;
use bezmat_core::Result;
use bezmat_math::binomial::falling_factorial;
use bezmat_math::power::{forward_difference, forward_difference_layers, linspace};
use bezmat_math::PointGrid;
use nalgebra::DMatrix;

use crate::coefficient::{bernstein_basis, CoefficientCache};
use crate::curve::check_params;

pub use bezier::{BezierSurface, RationalBezierSurface};

/// Surfaces that can be sampled on a parameter grid.
pub trait GridSurface: Send + Sync {
    fn degree_u(&self) -> usize;

    fn degree_v(&self) -> usize;

    fn dim(&self) -> usize;

    /// Evaluate on the tensor grid `u x v`.
    fn eval_params(&self, u: &[f64], v: &[f64]) -> Result<PointGrid>;

    /// Evaluate on `nu x nv` evenly spaced parameters over `[0, 1]^2`.
    fn eval_grid(&self, nu: usize, nv: usize) -> Result<PointGrid> {
        self.eval_params(&linspace(nu)?, &linspace(nv)?)
    }

    fn point_at(&self, u: f64, v: f64) -> Result<Vec<f64>> {
        Ok(self.eval_params(&[u], &[v])?.point(0, 0))
    }
}

/// A partial derivative along one axis vanishes only once its order exceeds
/// that axis' degree.
fn axis_vanishes(degree: usize, order: usize) -> bool {
    order > degree
}

/// Evaluate the `(order_u, order_v)` partial derivative on the tensor grid
/// `u x v`. Order `(0, 0)` is plain evaluation.
pub fn evaluate_surface_with(
    cache: &CoefficientCache,
    grid: &PointGrid,
    u: &[f64],
    v: &[f64],
    order_u: usize,
    order_v: usize,
) -> Result<PointGrid> {
    grid.validate()?;
    check_params(u)?;
    check_params(v)?;
    let n = grid.degree_u();
    let m = grid.degree_v();
    let dim = grid.dim();
    log::trace!(
        "evaluating {}x{} surface, order ({}, {}), {}x{} samples",
        n,
        m,
        order_u,
        order_v,
        u.len(),
        v.len()
    );

    if axis_vanishes(n, order_u) || axis_vanishes(m, order_v) {
        return Ok(PointGrid::zeros(u.len(), v.len(), dim));
    }

    let bu = bernstein_basis(cache, n - order_u, u)?;
    let bv = bernstein_basis(cache, m - order_v, v)?;

    let net: Vec<DMatrix<f64>> = forward_difference_layers(grid.layers(), order_u)
        .iter()
        .map(|layer| forward_difference(layer, order_v))
        .collect();

    // Contract along v: one nv x D matrix per remaining u-index.
    let along_v: Vec<DMatrix<f64>> = net.iter().map(|layer| &bv * layer).collect();

    // Contract along u: row i of `stacked` is layer i flattened column-major,
    // so `bu * stacked` holds sample s in row s.
    let nv = v.len();
    let stacked = DMatrix::from_fn(along_v.len(), nv * dim, |i, c| along_v[i][(c % nv, c / nv)]);
    let contracted = &bu * stacked;

    let scale = falling_factorial(n, order_u) * falling_factorial(m, order_v);
    let layers: Vec<DMatrix<f64>> = (0..u.len())
        .map(|s| DMatrix::from_fn(nv, dim, |j, k| contracted[(s, j + k * nv)] * scale))
        .collect();
    Ok(PointGrid::from(layers))
}

/// [`evaluate_surface_with`] on the global cache.
pub fn evaluate_surface(
    grid: &PointGrid,
    u: &[f64],
    v: &[f64],
    order_u: usize,
    order_v: usize,
) -> Result<PointGrid> {
    evaluate_surface_with(CoefficientCache::global(), grid, u, v, order_u, order_v)
}

pub fn surface_derivative_with(
    cache: &CoefficientCache,
    grid: &PointGrid,
    nu: usize,
    nv: usize,
    order_u: usize,
    order_v: usize,
) -> Result<PointGrid> {
    evaluate_surface_with(cache, grid, &linspace(nu)?, &linspace(nv)?, order_u, order_v)
}

/// The `(order_u, order_v)` partial derivative on an `nu x nv` uniform grid.
pub fn surface_derivative(
    grid: &PointGrid,
    nu: usize,
    nv: usize,
    order_u: usize,
    order_v: usize,
) -> Result<PointGrid> {
    surface_derivative_with(CoefficientCache::global(), grid, nu, nv, order_u, order_v)
}

pub fn surface_eval_with(
    cache: &CoefficientCache,
    grid: &PointGrid,
    nu: usize,
    nv: usize,
) -> Result<PointGrid> {
    surface_derivative_with(cache, grid, nu, nv, 0, 0)
}

/// Surface points on an `nu x nv` uniform grid, shape `nu x nv x D`.
pub fn surface_eval(grid: &PointGrid, nu: usize, nv: usize) -> Result<PointGrid> {
    surface_derivative(grid, nu, nv, 0, 0)
}

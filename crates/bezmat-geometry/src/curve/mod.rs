//! Bezier curve evaluation on parameter grids.
//!
//! A curve of degree `n` is evaluated as `P^T * M(n) * points`, where `P` is
//! the power-basis matrix of the parameters and `M(n)` the cached
//! coefficient matrix. The `r`-th derivative uses the `r`-th forward
//! difference of the control points with `M(n - r)`, scaled by the falling
//! factorial `n * (n - 1) * ... * (n - r + 1)`.

mod bezier;

use bezmat_core::traits::Validate;
use bezmat_core::{BezmatError, Result};
use bezmat_math::binomial::falling_factorial;
use bezmat_math::power::{forward_difference, linspace};
use bezmat_math::PointArray;

use crate::coefficient::{bernstein_basis, CoefficientCache};

pub use bezier::{BezierCurve, RationalBezierCurve};

/// Curves that can be sampled on a parameter grid.
pub trait GridCurve: Send + Sync {
    /// Polynomial degree (control point count minus one).
    fn degree(&self) -> usize;

    /// Coordinates per point.
    fn dim(&self) -> usize;

    /// Evaluate at arbitrary parameters.
    fn eval_params(&self, t: &[f64]) -> Result<PointArray>;

    /// Evaluate at `nt` evenly spaced parameters over `[0, 1]`.
    fn eval_grid(&self, nt: usize) -> Result<PointArray> {
        self.eval_params(&linspace(nt)?)
    }

    /// Evaluate at a single parameter.
    fn point_at(&self, t: f64) -> Result<Vec<f64>> {
        Ok(self.eval_params(&[t])?.point(0))
    }
}

/// True when the `order`-th derivative of a degree-`degree` polynomial is
/// reported as identically zero. Order 0 is plain evaluation and never
/// short-circuits.
pub(crate) fn derivative_vanishes(degree: usize, order: usize) -> bool {
    order > 0 && order >= degree
}

pub(crate) fn check_params(t: &[f64]) -> Result<()> {
    if t.is_empty() {
        return Err(BezmatError::invalid_shape("no parameter values given"));
    }
    if let Some((s, v)) = t.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(BezmatError::InvalidParameter(format!(
            "parameter {} is not finite: {}",
            s, v
        )));
    }
    Ok(())
}

/// Evaluate the `order`-th derivative of the curve at the parameters `t`.
pub fn evaluate_curve_with(
    cache: &CoefficientCache,
    points: &PointArray,
    t: &[f64],
    order: usize,
) -> Result<PointArray> {
    points.validate()?;
    check_params(t)?;
    let degree = points.degree();
    log::trace!(
        "evaluating degree {} curve, order {}, {} samples",
        degree,
        order,
        t.len()
    );

    if derivative_vanishes(degree, order) {
        return Ok(PointArray::zeros(t.len(), points.dim()));
    }

    let reduced = degree - order;
    let basis = bernstein_basis(cache, reduced, t)?;
    let mut result = if order == 0 {
        basis * points.as_matrix()
    } else {
        basis * forward_difference(points.as_matrix(), order)
    };
    if order > 0 {
        result *= falling_factorial(degree, order);
    }
    Ok(PointArray::from(result))
}

/// [`evaluate_curve_with`] on the global cache.
pub fn evaluate_curve(points: &PointArray, t: &[f64], order: usize) -> Result<PointArray> {
    evaluate_curve_with(CoefficientCache::global(), points, t, order)
}

pub fn curve_derivative_with(
    cache: &CoefficientCache,
    points: &PointArray,
    nt: usize,
    order: usize,
) -> Result<PointArray> {
    evaluate_curve_with(cache, points, &linspace(nt)?, order)
}

/// The `order`-th derivative at `nt` evenly spaced parameters, shape `nt x D`.
///
/// For `order >= 1` and `order >= degree` the result is all zeros.
pub fn curve_derivative(points: &PointArray, nt: usize, order: usize) -> Result<PointArray> {
    curve_derivative_with(CoefficientCache::global(), points, nt, order)
}

pub fn curve_eval_with(cache: &CoefficientCache, points: &PointArray, nt: usize) -> Result<PointArray> {
    curve_derivative_with(cache, points, nt, 0)
}

/// Curve points at `nt` evenly spaced parameters, shape `nt x D`.
pub fn curve_eval(points: &PointArray, nt: usize) -> Result<PointArray> {
    curve_derivative(points, nt, 0)
}

pub fn curve_first_derivative(points: &PointArray, nt: usize) -> Result<PointArray> {
    curve_derivative(points, nt, 1)
}

pub fn curve_second_derivative(points: &PointArray, nt: usize) -> Result<PointArray> {
    curve_derivative(points, nt, 2)
}

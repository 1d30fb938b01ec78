//! Bezier and rational Bezier surface types.

use bezmat_core::traits::Validate;
use bezmat_core::Result;
use bezmat_math::{PointGrid, WeightGrid};
use serde::{Deserialize, Serialize};

use super::{evaluate_surface, GridSurface};
use crate::rational::evaluate_rational_surface;

/// A tensor-product Bezier surface.
///
/// `control_points.point(i, j)` is the control point at u-index `i` and
/// v-index `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierSurface {
    pub control_points: PointGrid,
}

impl BezierSurface {
    pub fn new(control_points: PointGrid) -> Result<Self> {
        control_points.validate()?;
        Ok(Self { control_points })
    }

    pub fn from_nested(grid: &[Vec<Vec<f64>>]) -> Result<Self> {
        Self::new(PointGrid::from_nested(grid)?)
    }

    /// Partial derivative `(order_u, order_v)` on the tensor grid `u x v`.
    pub fn derivative_params(
        &self,
        u: &[f64],
        v: &[f64],
        order_u: usize,
        order_v: usize,
    ) -> Result<PointGrid> {
        evaluate_surface(&self.control_points, u, v, order_u, order_v)
    }

    /// Partial derivative `(order_u, order_v)` on an `nu x nv` uniform grid.
    pub fn derivative_grid(
        &self,
        nu: usize,
        nv: usize,
        order_u: usize,
        order_v: usize,
    ) -> Result<PointGrid> {
        super::surface_derivative(&self.control_points, nu, nv, order_u, order_v)
    }
}

impl GridSurface for BezierSurface {
    fn degree_u(&self) -> usize {
        self.control_points.degree_u()
    }

    fn degree_v(&self) -> usize {
        self.control_points.degree_v()
    }

    fn dim(&self) -> usize {
        self.control_points.dim()
    }

    fn eval_params(&self, u: &[f64], v: &[f64]) -> Result<PointGrid> {
        evaluate_surface(&self.control_points, u, v, 0, 0)
    }
}

/// A rational Bezier surface: a control net with one weight per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationalBezierSurface {
    pub control_points: PointGrid,
    pub weights: WeightGrid,
}

impl RationalBezierSurface {
    pub fn new(control_points: PointGrid, weights: WeightGrid) -> Result<Self> {
        control_points.validate()?;
        weights.check_matches(&control_points)?;
        Ok(Self {
            control_points,
            weights,
        })
    }
}

impl GridSurface for RationalBezierSurface {
    fn degree_u(&self) -> usize {
        self.control_points.degree_u()
    }

    fn degree_v(&self) -> usize {
        self.control_points.degree_v()
    }

    fn dim(&self) -> usize {
        self.control_points.dim()
    }

    fn eval_params(&self, u: &[f64], v: &[f64]) -> Result<PointGrid> {
        evaluate_rational_surface(&self.control_points, &self.weights, u, v)
    }
}

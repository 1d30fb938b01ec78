//! Bezier and rational Bezier curve types.

use bezmat_core::traits::Validate;
use bezmat_core::Result;
use bezmat_math::{PointArray, WeightArray};
use serde::{Deserialize, Serialize};

use super::{evaluate_curve, GridCurve};
use crate::rational::evaluate_rational_curve;

/// A Bezier curve defined by its control polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    pub control_points: PointArray,
}

impl BezierCurve {
    pub fn new(control_points: PointArray) -> Result<Self> {
        control_points.validate()?;
        Ok(Self { control_points })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        Self::new(PointArray::from_rows(rows)?)
    }

    /// The `order`-th derivative at arbitrary parameters.
    pub fn derivative_params(&self, t: &[f64], order: usize) -> Result<PointArray> {
        evaluate_curve(&self.control_points, t, order)
    }

    /// The `order`-th derivative at `nt` evenly spaced parameters.
    pub fn derivative_grid(&self, nt: usize, order: usize) -> Result<PointArray> {
        super::curve_derivative(&self.control_points, nt, order)
    }
}

impl GridCurve for BezierCurve {
    fn degree(&self) -> usize {
        self.control_points.degree()
    }

    fn dim(&self) -> usize {
        self.control_points.dim()
    }

    fn eval_params(&self, t: &[f64]) -> Result<PointArray> {
        evaluate_curve(&self.control_points, t, 0)
    }
}

/// A rational Bezier curve: control points with one weight each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationalBezierCurve {
    pub control_points: PointArray,
    pub weights: WeightArray,
}

impl RationalBezierCurve {
    pub fn new(control_points: PointArray, weights: WeightArray) -> Result<Self> {
        control_points.validate()?;
        weights.check_matches(&control_points)?;
        Ok(Self {
            control_points,
            weights,
        })
    }

    /// A rational curve with every weight equal to one.
    pub fn from_polynomial(curve: &BezierCurve) -> Self {
        Self {
            weights: WeightArray::uniform(curve.control_points.len()),
            control_points: curve.control_points.clone(),
        }
    }
}

impl GridCurve for RationalBezierCurve {
    fn degree(&self) -> usize {
        self.control_points.degree()
    }

    fn dim(&self) -> usize {
        self.control_points.dim()
    }

    fn eval_params(&self, t: &[f64]) -> Result<PointArray> {
        evaluate_rational_curve(&self.control_points, &self.weights, t)
    }
}

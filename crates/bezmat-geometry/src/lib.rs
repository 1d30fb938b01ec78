//! Bezmat geometry: Bezier and rational Bezier curves and surfaces evaluated
//! on parameter grids through cached Bernstein coefficient matrices.

pub mod batch;
pub mod coefficient;
pub mod curve;
pub mod rational;
pub mod surface;

pub use coefficient::{generate, CoefficientCache, CoefficientMatrix};
pub use curve::{
    curve_derivative, curve_eval, curve_first_derivative, curve_second_derivative,
    evaluate_curve, BezierCurve, GridCurve, RationalBezierCurve,
};
pub use rational::{
    evaluate_rational_curve, evaluate_rational_surface, rational_curve_eval,
    rational_surface_eval,
};
pub use surface::{
    evaluate_surface, surface_derivative, surface_eval, BezierSurface, GridSurface,
    RationalBezierSurface,
};

pub mod binomial;
pub mod grid;
pub mod homogeneous;
pub mod points;
pub mod power;
pub mod weights;

pub use glam::{DVec2, DVec3};
pub use nalgebra::{DMatrix, DVector};

pub use grid::PointGrid;
pub use points::PointArray;
pub use weights::{WeightArray, WeightGrid};

pub type Point2 = DVec2;
pub type Point3 = DVec3;

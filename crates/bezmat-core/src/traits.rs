use crate::error::Result;

/// Validate the structural integrity of an input array.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Report the array shape, outermost dimension first.
pub trait Shape {
    fn shape(&self) -> Vec<usize>;
}

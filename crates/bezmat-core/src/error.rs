use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BezmatError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("Unsupported degree {degree} (supported: 0..={max})")]
    UnsupportedDegree { degree: usize, max: usize },

    #[error("Degenerate weight: homogeneous divisor is zero at sample {sample}")]
    DegenerateWeight { sample: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl BezmatError {
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }

    pub fn shape_mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BezmatError>;

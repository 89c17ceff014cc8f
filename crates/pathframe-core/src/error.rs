use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathframeError {
    /// A constructor or setter was handed data that breaks a structural invariant.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PathframeError {
    /// Error for a control-point count that does not match `degree + 1`.
    pub fn control_point_count(degree: usize, got: usize) -> Self {
        Self::InvalidArgument(format!(
            "number of control points must be equal to degree + 1 \
             (degree {degree}, got {got} points)"
        ))
    }
}

pub type Result<T> = std::result::Result<T, PathframeError>;

// ============================================================================
// Vector Errors
// Error types for numeric vector operations
// ============================================================================

use std::fmt;

/// Errors that can occur during vector operations.
///
/// Every fallible operation reports its failure synchronously and leaves the
/// receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// Index was not below the vector length
    OutOfRange { index: usize, len: usize },
    /// Binary operation on vectors of different lengths
    SizeMismatch { left: usize, right: usize },
    /// Scalar divisor is zero (within tolerance for floating point)
    DivideByZero,
    /// Operation requires a vector of a specific length
    DimensionMismatch { expected: usize, actual: usize },
    /// Tolerance must be finite and non-negative
    InvalidTolerance(f64),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::OutOfRange { index, len } => {
                write!(f, "index out of range: index {} but length is {}", index, len)
            },
            VectorError::SizeMismatch { left, right } => {
                write!(f, "size mismatch: {} vs {} elements", left, right)
            },
            VectorError::DivideByZero => write!(f, "division by zero"),
            VectorError::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {} elements, got {}",
                expected, actual
            ),
            VectorError::InvalidTolerance(value) => write!(
                f,
                "invalid tolerance {}: must be finite and non-negative",
                value
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            VectorError::OutOfRange { index: 3, len: 3 }.to_string(),
            "index out of range: index 3 but length is 3"
        );
        assert_eq!(
            VectorError::SizeMismatch { left: 2, right: 3 }.to_string(),
            "size mismatch: 2 vs 3 elements"
        );
        assert_eq!(VectorError::DivideByZero.to_string(), "division by zero");
        assert_eq!(
            VectorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "dimension mismatch: expected 3 elements, got 2"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(VectorError::DivideByZero, VectorError::DivideByZero);
        assert_ne!(
            VectorError::SizeMismatch { left: 1, right: 2 },
            VectorError::SizeMismatch { left: 2, right: 1 }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(VectorError::InvalidTolerance(-1.0));
        assert!(err.to_string().starts_with("invalid tolerance -1"));
    }
}

// ============================================================================
// Numeric Errors
// Error types for tuple construction, access and arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when building or combining numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathError {
    /// Tuple constructed with zero components (one is the minimum)
    EmptyTuple,
    /// Component index outside `[0, dimension)`
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Dimension of the accessed tuple
        dimension: usize,
    },
    /// Binary operation between operands of differing dimension
    DimensionMismatch {
        /// Dimension of the left-hand operand
        expected: usize,
        /// Dimension of the right-hand operand
        actual: usize,
    },
    /// Configuration value outside its documented domain
    InvalidInput,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::EmptyTuple => {
                write!(f, "tuple must have at least one component")
            },
            MathError::IndexOutOfRange { index, dimension } => {
                write!(f, "index {} out of range for dimension {}", index, dimension)
            },
            MathError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: {} vs {}", expected, actual)
            },
            MathError::InvalidInput => write!(f, "invalid input: value outside its domain"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for numeric operations
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MathError::EmptyTuple.to_string(),
            "tuple must have at least one component"
        );
        assert_eq!(
            MathError::IndexOutOfRange { index: 5, dimension: 3 }.to_string(),
            "index 5 out of range for dimension 3"
        );
        assert_eq!(
            MathError::DimensionMismatch { expected: 2, actual: 4 }.to_string(),
            "dimension mismatch: 2 vs 4"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MathError::EmptyTuple, MathError::EmptyTuple);
        assert_ne!(
            MathError::EmptyTuple,
            MathError::DimensionMismatch { expected: 1, actual: 2 }
        );
    }
}

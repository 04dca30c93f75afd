// ============================================================================
// Field Math Library
// Lane-wise field arithmetic and shortest round-trip float formatting
// ============================================================================

//! # Field Math
//!
//! Numeric building blocks around two cores: exact shortest round-trip
//! rendering of IEEE-754 doubles, and a generic field-element abstraction
//! with a lane-wise tuple type over it.
//!
//! ## Features
//!
//! - **Shortest decimal conversion**: minimal-digit strings that parse back
//!   to the exact original bit pattern, with plain/scientific thresholds and
//!   a lossy significant-digit budget mode
//! - **Field element traits** with a plain `f64` backend
//! - **Lane-wise tuples** satisfying the same arithmetic contract as their
//!   scalar lanes, so one generic algorithm invocation batches several
//!   independent scalar computations
//! - **Central-difference differentiation** written against the traits
//! - Pure, lock-free operations; the only shared state is the lazily built
//!   singleton field registry and conversion tables
//!
//! ## Example
//!
//! ```rust
//! use field_math::prelude::*;
//!
//! // batch four abscissae through one derivative evaluation
//! let x = Tuple::new(&[0.0, 0.5, 1.0, 2.0]).unwrap();
//! let scheme = FiniteDifferences::new(5, 1.0e-3).unwrap();
//! let slope = scheme.derivative(|t: Tuple| t.sin(), &x);
//! assert!((slope.real() - 1.0).abs() < 1.0e-9);
//!
//! // shortest round-trip rendering
//! assert_eq!(decimal::shortest(0.001), "0.001");
//! assert_eq!(decimal::shortest(1.0e7), "1.0E7");
//! assert_eq!(slope.to_string(), format!("({})", slope
//!     .components()
//!     .iter()
//!     .map(|c| decimal::shortest(*c))
//!     .collect::<Vec<_>>()
//!     .join(", ")));
//! ```

pub mod analysis;
pub mod decimal;
pub mod field;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::analysis::FiniteDifferences;
    pub use crate::decimal;
    pub use crate::field::{
        linear_combination, Field, FieldElement, RealField, RealFieldElement, Tuple, TupleField,
    };
    pub use crate::numeric::{MathError, MathResult};
}

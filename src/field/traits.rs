// ============================================================================
// Field Element Traits
// Abstract interface for scalar types supporting field arithmetic
// ============================================================================

use std::fmt;
use std::hash::Hasher;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use crate::numeric::{MathError, MathResult};

/// Trait for values forming an algebraic field.
///
/// Arithmetic goes through the standard operator traits; this trait adds the
/// pieces operators cannot express: the multiplicative inverse, bit-level
/// identity, hashing, and access to the field handle carrying the identity
/// elements.
///
/// # Thread Safety
/// All implementations must be `Send + Sync`, so elements can be shared
/// freely across threads. Every operation is pure.
///
/// # Equality
/// [`identical`](FieldElement::identical) is bit-level: NaN compares equal
/// to NaN and +0.0 differs from -0.0. This is the equality used by
/// containers, not numeric `==`.
pub trait FieldElement:
    Sized
    + Clone
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Field handle type this element belongs to.
    type Field: Field<Element = Self>;

    /// Get the singleton field handle for this element.
    fn field(&self) -> Arc<Self::Field>;

    /// Multiplicative inverse, with IEEE semantics per lane: the reciprocal
    /// of ±infinity is ±0 and the reciprocal of ±0 is ±infinity.
    fn reciprocal(&self) -> Self;

    /// Bit-level equality.
    fn identical(&self, other: &Self) -> bool;

    /// Feed the bit-level identity of this element into a hasher.
    fn hash_component<H: Hasher>(&self, state: &mut H);
}

/// Field handle: carries the identity elements of a field.
///
/// Handles are singletons — one instance per field configuration for the
/// lifetime of the process — and compare equal exactly when they describe
/// the same configuration.
pub trait Field: fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Element type of the field
    type Element: FieldElement;

    /// Additive identity
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity
    fn one(&self) -> Self::Element;
}

/// Field elements embedding the real line.
///
/// Adds the IEEE-754 operation set of the scalar backend: mixed
/// element/scalar arithmetic, rounding, sign manipulation, angle conversion
/// and the usual transcendental functions. Tuples implement every operation
/// lane-wise, which is what lets one invocation of a generic algorithm
/// batch several independent scalar computations.
pub trait RealFieldElement: FieldElement {
    /// Real value of this element; for tuples this is the first lane,
    /// serving as a convergence and printing proxy.
    fn real(&self) -> f64;

    /// Build an element of the same shape holding `value` in every lane.
    fn from_real(&self, value: f64) -> Self;

    fn add_real(&self, a: f64) -> Self;
    fn sub_real(&self, a: f64) -> Self;
    fn mul_real(&self, a: f64) -> Self;
    fn div_real(&self, a: f64) -> Self;

    /// IEEE remainder: `self - n * rhs` with `n` the nearest integer to the
    /// exact quotient, ties to even.
    fn remainder(&self, rhs: &Self) -> Self;
    fn remainder_real(&self, a: f64) -> Self;

    fn abs(&self) -> Self;
    fn ceil(&self) -> Self;
    fn floor(&self) -> Self;

    /// Round to the nearest integral value, ties to even.
    fn rint(&self) -> Self;

    /// Closest `i64` to the first lane, computed as floor(x + 0.5).
    /// Tuples round every lane with `round_lanes`.
    fn round(&self) -> i64;

    /// ±1 with the sign of the value; signed zeros and NaN pass through.
    fn signum(&self) -> Self;

    fn copy_sign(&self, sign: &Self) -> Self;
    fn copy_sign_real(&self, sign: f64) -> Self;

    /// Exact scaling by 2^n, correct through the subnormal range.
    fn scalb(&self, n: i32) -> Self;

    fn to_degrees(&self) -> Self;
    fn to_radians(&self) -> Self;

    fn sqrt(&self) -> Self;
    fn exp(&self) -> Self;
    fn ln(&self) -> Self;
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    /// Sine and cosine in one pass.
    fn sin_cos(&self) -> (Self, Self);
    fn tan(&self) -> Self;
    fn atan2(&self, x: &Self) -> Self;
    fn hypot(&self, y: &Self) -> Self;
    fn pow(&self, p: f64) -> Self;
    fn powi(&self, n: i32) -> Self;
}

/// Dot product of two equal-length coefficient slices, accumulated in slice
/// order.
///
/// # Errors
/// Returns `DimensionMismatch` when the slices differ in length and
/// `InvalidInput` when they are empty.
pub fn linear_combination<T: RealFieldElement>(a: &[T], b: &[T]) -> MathResult<T> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let Some((first_a, rest_a)) = a.split_first() else {
        return Err(MathError::InvalidInput);
    };
    let (first_b, rest_b) = b.split_first().expect("lengths match");
    let mut sum = first_a.clone() * first_b.clone();
    for (x, y) in rest_a.iter().zip(rest_b) {
        sum = sum + x.clone() * y.clone();
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_combination_scalars() {
        let result = linear_combination(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(result, 32.0);
    }

    #[test]
    fn test_linear_combination_length_mismatch() {
        let result = linear_combination(&[1.0, 2.0], &[4.0]);
        assert_eq!(
            result,
            Err(MathError::DimensionMismatch { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_linear_combination_empty() {
        let empty: &[f64] = &[];
        assert_eq!(linear_combination(empty, empty), Err(MathError::InvalidInput));
    }
}

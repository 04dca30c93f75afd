// ============================================================================
// Tuple
// Fixed-width lane-wise vector of field elements, itself a field element
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decimal;
use crate::numeric::{MathError, MathResult};

use super::registry;
use super::traits::{Field, FieldElement, RealFieldElement};

/// Number of lanes stored inline before spilling to the heap.
const INLINE_LANES: usize = 4;

type Lanes<T> = SmallVec<[T; INLINE_LANES]>;

/// An immutable fixed-width vector of field elements with lane-wise
/// arithmetic.
///
/// A tuple satisfies the same arithmetic contract as its scalar lanes, so
/// it can be passed through any algorithm written against
/// [`RealFieldElement`], batching several independent scalar computations
/// into one invocation.
///
/// The dimension is fixed at construction. Binary operations require equal
/// dimensions: the `checked_*` methods report a
/// [`DimensionMismatch`](MathError::DimensionMismatch), the operator and
/// trait forms panic.
///
/// # Equality
/// Two tuples are equal iff they have the same dimension and every lane is
/// bit-identical: NaN lanes compare equal, +0.0 and -0.0 differ.
///
/// # Example
/// ```
/// use field_math::field::Tuple;
///
/// let t = Tuple::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(t.dimension(), 5);
/// assert_eq!(*t.component(2).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple<T: RealFieldElement = f64> {
    components: Lanes<T>,
}

impl<T: RealFieldElement> Tuple<T> {
    /// Create a new tuple from its components.
    ///
    /// # Errors
    /// Returns `EmptyTuple` when `components` is empty; one lane is the
    /// minimum dimension.
    pub fn new(components: &[T]) -> MathResult<Self> {
        if components.is_empty() {
            return Err(MathError::EmptyTuple);
        }
        Ok(Self {
            components: components.iter().cloned().collect(),
        })
    }

    fn from_lanes(components: Lanes<T>) -> Self {
        debug_assert!(!components.is_empty());
        Self { components }
    }

    /// Dimension (number of lanes) of the tuple.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Get one component.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` when `index` is not in `[0, dimension)`.
    pub fn component(&self, index: usize) -> MathResult<&T> {
        self.components.get(index).ok_or(MathError::IndexOutOfRange {
            index,
            dimension: self.components.len(),
        })
    }

    /// All components, in lane order.
    #[inline]
    pub fn components(&self) -> &[T] {
        &self.components
    }

    fn map(&self, op: impl Fn(&T) -> T) -> Self {
        Self::from_lanes(self.components.iter().map(op).collect())
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(&T, &T) -> T) -> MathResult<Self> {
        if self.dimension() != rhs.dimension() {
            return Err(MathError::DimensionMismatch {
                expected: self.dimension(),
                actual: rhs.dimension(),
            });
        }
        Ok(Self::from_lanes(
            self.components
                .iter()
                .zip(&rhs.components)
                .map(|(a, b)| op(a, b))
                .collect(),
        ))
    }

    /// Lane-wise addition.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_add(&self, rhs: &Self) -> MathResult<Self> {
        self.zip_with(rhs, |a, b| a.clone() + b.clone())
    }

    /// Lane-wise subtraction.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_sub(&self, rhs: &Self) -> MathResult<Self> {
        self.zip_with(rhs, |a, b| a.clone() - b.clone())
    }

    /// Lane-wise multiplication.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_mul(&self, rhs: &Self) -> MathResult<Self> {
        self.zip_with(rhs, |a, b| a.clone() * b.clone())
    }

    /// Lane-wise division, following IEEE semantics per lane (a zero
    /// divisor lane yields an infinite or NaN lane, not an error).
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_div(&self, rhs: &Self) -> MathResult<Self> {
        self.zip_with(rhs, |a, b| a.clone() / b.clone())
    }

    /// Lane-wise IEEE remainder.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_remainder(&self, rhs: &Self) -> MathResult<Self> {
        self.zip_with(rhs, |a, b| a.remainder(b))
    }

    /// Lane-wise magnitude of `self` with the sign of `sign`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_copy_sign(&self, sign: &Self) -> MathResult<Self> {
        self.zip_with(sign, |a, b| a.copy_sign(b))
    }

    /// Lane-wise four-quadrant arc tangent of `self / x`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_atan2(&self, x: &Self) -> MathResult<Self> {
        self.zip_with(x, |a, b| a.atan2(b))
    }

    /// Lane-wise `sqrt(self² + y²)` without intermediate overflow.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the dimensions differ.
    pub fn checked_hypot(&self, y: &Self) -> MathResult<Self> {
        self.zip_with(y, |a, b| a.hypot(b))
    }

    /// Round every lane to the closest integer, as floor(x + 0.5).
    pub fn round_lanes(&self) -> Vec<i64> {
        self.components.iter().map(|c| c.round()).collect()
    }

    /// Render the tuple with at most `max_digits` significant digits per
    /// lane.
    pub fn format_rounded(&self, max_digits: usize) -> String {
        let mut out = String::from("(");
        for (k, component) in self.components.iter().enumerate() {
            if k > 0 {
                out.push_str(", ");
            }
            out.push_str(&decimal::rounded(component.real(), max_digits));
        }
        out.push(')');
        out
    }
}

// ============================================================================
// Field handle
// ============================================================================

/// Field handle for tuples of a given scalar type and dimension.
///
/// Exactly one handle exists per (scalar type, dimension) pair for the
/// lifetime of the process. Handles are obtained through
/// [`FieldElement::field`], never constructed directly, and compare equal
/// exactly when scalar field and dimension both match.
#[derive(Debug)]
pub struct TupleField<T: RealFieldElement> {
    component_field: Arc<T::Field>,
    dimension: usize,
}

impl<T: RealFieldElement> TupleField<T> {
    pub(crate) fn new(component_field: Arc<T::Field>, dimension: usize) -> Self {
        Self {
            component_field,
            dimension,
        }
    }

    /// Dimension of the tuples belonging to this field.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl<T: RealFieldElement> PartialEq for TupleField<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.component_field == other.component_field
    }
}

impl<T: RealFieldElement> Field for TupleField<T> {
    type Element = Tuple<T>;

    fn zero(&self) -> Tuple<T> {
        Tuple::from_lanes((0..self.dimension).map(|_| self.component_field.zero()).collect())
    }

    fn one(&self) -> Tuple<T> {
        Tuple::from_lanes((0..self.dimension).map(|_| self.component_field.one()).collect())
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<T: RealFieldElement> FieldElement for Tuple<T> {
    type Field = TupleField<T>;

    fn field(&self) -> Arc<TupleField<T>> {
        registry::tuple_field_of(&self.components[0], self.components.len())
    }

    fn reciprocal(&self) -> Self {
        self.map(|c| c.reciprocal())
    }

    fn identical(&self, other: &Self) -> bool {
        self.components.len() == other.components.len()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a.identical(b))
    }

    fn hash_component<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.components.len());
        for component in &self.components {
            component.hash_component(state);
        }
    }
}

impl<T: RealFieldElement> RealFieldElement for Tuple<T> {
    fn real(&self) -> f64 {
        self.components[0].real()
    }

    fn from_real(&self, value: f64) -> Self {
        self.map(|c| c.from_real(value))
    }

    fn add_real(&self, a: f64) -> Self {
        self.map(|c| c.add_real(a))
    }

    fn sub_real(&self, a: f64) -> Self {
        self.map(|c| c.sub_real(a))
    }

    fn mul_real(&self, a: f64) -> Self {
        self.map(|c| c.mul_real(a))
    }

    fn div_real(&self, a: f64) -> Self {
        self.map(|c| c.div_real(a))
    }

    fn remainder(&self, rhs: &Self) -> Self {
        self.checked_remainder(rhs)
            .expect("tuple dimension mismatch in remainder")
    }

    fn remainder_real(&self, a: f64) -> Self {
        self.map(|c| c.remainder_real(a))
    }

    fn abs(&self) -> Self {
        self.map(|c| c.abs())
    }

    fn ceil(&self) -> Self {
        self.map(|c| c.ceil())
    }

    fn floor(&self) -> Self {
        self.map(|c| c.floor())
    }

    fn rint(&self) -> Self {
        self.map(|c| c.rint())
    }

    fn round(&self) -> i64 {
        self.components[0].round()
    }

    fn signum(&self) -> Self {
        self.map(|c| c.signum())
    }

    fn copy_sign(&self, sign: &Self) -> Self {
        self.checked_copy_sign(sign)
            .expect("tuple dimension mismatch in copy_sign")
    }

    fn copy_sign_real(&self, sign: f64) -> Self {
        self.map(|c| c.copy_sign_real(sign))
    }

    fn scalb(&self, n: i32) -> Self {
        self.map(|c| c.scalb(n))
    }

    fn to_degrees(&self) -> Self {
        self.map(|c| c.to_degrees())
    }

    fn to_radians(&self) -> Self {
        self.map(|c| c.to_radians())
    }

    fn sqrt(&self) -> Self {
        self.map(|c| c.sqrt())
    }

    fn exp(&self) -> Self {
        self.map(|c| c.exp())
    }

    fn ln(&self) -> Self {
        self.map(|c| c.ln())
    }

    fn sin(&self) -> Self {
        self.map(|c| c.sin())
    }

    fn cos(&self) -> Self {
        self.map(|c| c.cos())
    }

    fn sin_cos(&self) -> (Self, Self) {
        let mut sines = Lanes::with_capacity(self.components.len());
        let mut cosines = Lanes::with_capacity(self.components.len());
        for component in &self.components {
            let (s, c) = component.sin_cos();
            sines.push(s);
            cosines.push(c);
        }
        (Self::from_lanes(sines), Self::from_lanes(cosines))
    }

    fn tan(&self) -> Self {
        self.map(|c| c.tan())
    }

    fn atan2(&self, x: &Self) -> Self {
        self.checked_atan2(x)
            .expect("tuple dimension mismatch in atan2")
    }

    fn hypot(&self, y: &Self) -> Self {
        self.checked_hypot(y)
            .expect("tuple dimension mismatch in hypot")
    }

    fn pow(&self, p: f64) -> Self {
        self.map(|c| c.pow(p))
    }

    fn powi(&self, n: i32) -> Self {
        self.map(|c| c.powi(n))
    }
}

// ============================================================================
// Operators (panic on dimension mismatch - use checked_* to recover)
// ============================================================================

impl<T: RealFieldElement> Add for Tuple<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs).expect("tuple dimension mismatch in addition")
    }
}

impl<T: RealFieldElement> Sub for Tuple<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs).expect("tuple dimension mismatch in subtraction")
    }
}

impl<T: RealFieldElement> Mul for Tuple<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs).expect("tuple dimension mismatch in multiplication")
    }
}

impl<T: RealFieldElement> Div for Tuple<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.checked_div(&rhs).expect("tuple dimension mismatch in division")
    }
}

impl<T: RealFieldElement> Neg for Tuple<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c.clone())
    }
}

// ============================================================================
// Equality, hashing and display
// ============================================================================

impl<T: RealFieldElement> PartialEq for Tuple<T> {
    fn eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

// bit-level lane equality is reflexive, NaN lanes included
impl<T: RealFieldElement> Eq for Tuple<T> {}

impl<T: RealFieldElement> Hash for Tuple<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_component(state);
    }
}

impl<T: RealFieldElement> fmt::Display for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, component) in self.components.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", decimal::shortest(component.real()))?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use std::collections::hash_map::DefaultHasher;

    fn tuple(components: &[f64]) -> Tuple {
        Tuple::new(components).unwrap()
    }

    fn hash_of(t: &Tuple) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_construction_and_accessors() {
        let t = tuple(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(t.dimension(), 5);
        assert_eq!(*t.component(2).unwrap(), 3.0);
        assert_eq!(t.components(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_empty_construction_fails() {
        assert_eq!(Tuple::<f64>::new(&[]), Err(MathError::EmptyTuple));
    }

    #[test]
    fn test_component_out_of_range() {
        let t = tuple(&[1.0, 2.0]);
        assert_eq!(
            t.component(2),
            Err(MathError::IndexOutOfRange { index: 2, dimension: 2 })
        );
    }

    #[test]
    fn test_lane_arithmetic() {
        let a = tuple(&[1.0, 2.0, 3.0]);
        let b = tuple(&[10.0, 20.0, 30.0]);
        assert_eq!(a.checked_add(&b).unwrap(), tuple(&[11.0, 22.0, 33.0]));
        assert_eq!(b.checked_sub(&a).unwrap(), tuple(&[9.0, 18.0, 27.0]));
        assert_eq!(a.checked_mul(&b).unwrap(), tuple(&[10.0, 40.0, 90.0]));
        assert_eq!(b.checked_div(&a).unwrap(), tuple(&[10.0, 10.0, 10.0]));
        assert_eq!(a.clone() + b.clone(), tuple(&[11.0, 22.0, 33.0]));
        assert_eq!(-a, tuple(&[-1.0, -2.0, -3.0]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = tuple(&[1.0, 2.0, 3.0]);
        let b = tuple(&[1.0, 2.0]);
        assert_eq!(
            a.checked_add(&b),
            Err(MathError::DimensionMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            a.checked_remainder(&b),
            Err(MathError::DimensionMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "tuple dimension mismatch")]
    fn test_operator_panics_on_mismatch() {
        let _ = tuple(&[1.0, 2.0, 3.0]) + tuple(&[1.0, 2.0]);
    }

    #[test]
    fn test_ieee_edge_lanes() {
        let t = tuple(&[f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0, 2.0]);
        let r = t.reciprocal();
        assert_eq!(*r.component(0).unwrap(), 0.0);
        assert!(r.component(0).unwrap().is_sign_positive());
        assert_eq!(*r.component(1).unwrap(), 0.0);
        assert!(r.component(1).unwrap().is_sign_negative());
        assert_eq!(*r.component(2).unwrap(), f64::INFINITY);
        assert_eq!(*r.component(3).unwrap(), f64::NEG_INFINITY);
        assert_eq!(*r.component(4).unwrap(), 0.5);
    }

    #[test]
    fn test_reciprocal_multiplication_approaches_one() {
        let t = tuple(&[3.0, -7.5, 1.0e-200, 4.0e155]);
        let product = t.clone() * t.reciprocal();
        for lane in product.components() {
            assert!((lane - 1.0).abs() < 1.0e-15, "lane = {}", lane);
        }
    }

    #[test]
    fn test_bitwise_equality() {
        let with_nan = tuple(&[f64::NAN, 1.0]);
        assert_eq!(with_nan, with_nan.clone());

        assert_ne!(tuple(&[0.0, 1.0]), tuple(&[-0.0, 1.0]));
        assert_ne!(tuple(&[1.0, 2.0]), tuple(&[1.0, 2.0, 3.0]));
        assert_eq!(tuple(&[1.0, 2.0]), tuple(&[1.0, 2.0]));
    }

    #[test]
    fn test_hash_consistency() {
        let a = tuple(&[1.0, f64::NAN, -0.0]);
        let b = tuple(&[1.0, f64::NAN, -0.0]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        // order-sensitive: permuting distinct lanes changes the hash
        let permuted = tuple(&[-0.0, f64::NAN, 1.0]);
        assert_ne!(a, permuted);
        assert_ne!(hash_of(&a), hash_of(&permuted));
    }

    #[test]
    fn test_algebraic_identities() {
        let a = tuple(&[1.5, -2.25, 1.0e10]);
        let b = tuple(&[0.5, 4.0, -3.0e-7]);
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(a.clone() + (-b.clone()), a.clone() - b.clone());
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_degrees_radians_round_trip() {
        let t = tuple(&[1.0e-6, 0.5, 1.0, 42.0, 1.0e6]);
        let round_trip = t.to_degrees().to_radians();
        for (lane, original) in round_trip.components().iter().zip(t.components()) {
            assert!((lane - original).abs() <= 3.0e-16 * original.abs());
        }
    }

    #[test]
    fn test_rounding_operations() {
        let t = tuple(&[2.5, -2.5, 1.2, -1.2]);
        assert_eq!(t.round_lanes(), vec![3, -2, 1, -1]);
        assert_eq!(RealFieldElement::round(&t), 3);
        assert_eq!(t.rint(), tuple(&[2.0, -2.0, 1.0, -1.0]));
        assert_eq!(t.floor(), tuple(&[2.0, -3.0, 1.0, -2.0]));
        assert_eq!(t.ceil(), tuple(&[3.0, -2.0, 2.0, -1.0]));
    }

    #[test]
    fn test_sign_operations() {
        let t = tuple(&[-3.0, 4.0, -0.0]);
        assert_eq!(t.abs(), tuple(&[3.0, 4.0, 0.0]));
        assert_eq!(t.signum(), tuple(&[-1.0, 1.0, -0.0]));
        let signs = tuple(&[1.0, -1.0, -5.0]);
        assert_eq!(
            t.checked_copy_sign(&signs).unwrap(),
            tuple(&[3.0, -4.0, -0.0])
        );
    }

    #[test]
    fn test_real_is_first_lane() {
        let t = tuple(&[7.25, 1.0, 2.0]);
        assert_eq!(t.real(), 7.25);
        assert_eq!(t.from_real(3.0), tuple(&[3.0, 3.0, 3.0]));
    }

    #[test]
    fn test_field_handle_is_singleton() {
        let a = tuple(&[1.0, 2.0, 3.0]);
        let b = tuple(&[9.0, 8.0, 7.0]);
        assert!(Arc::ptr_eq(&a.field(), &b.field()));
        assert_eq!(a.field().dimension(), 3);
        assert_eq!(a.field().zero(), tuple(&[0.0, 0.0, 0.0]));
        assert_eq!(a.field().one(), tuple(&[1.0, 1.0, 1.0]));

        let c = tuple(&[1.0, 2.0]);
        assert!(!Arc::ptr_eq(&a.field(), &c.field()));
        assert_ne!(*a.field(), *c.field());
    }

    #[test]
    fn test_sin_cos_matches_lanes() {
        let t = tuple(&[0.0, 0.5, 2.0]);
        let (sines, cosines) = t.sin_cos();
        for ((s, c), lane) in sines
            .components()
            .iter()
            .zip(cosines.components())
            .zip(t.components())
        {
            assert_eq!(*s, lane.sin());
            assert_eq!(*c, lane.cos());
        }
    }

    #[test]
    fn test_transcendental_lanes() {
        let t = tuple(&[1.0, 4.0]);
        assert_eq!(t.sqrt(), tuple(&[1.0, 2.0]));
        assert_eq!(t.powi(2), tuple(&[1.0, 16.0]));
        assert_eq!(t.pow(0.5), tuple(&[1.0, 2.0]));
        assert_eq!(t.scalb(3), tuple(&[8.0, 32.0]));

        let legs = tuple(&[3.0, 4.0]);
        assert_eq!(legs.checked_hypot(&tuple(&[4.0, 3.0])).unwrap(), tuple(&[5.0, 5.0]));

        let quotients = tuple(&[1.0, 0.0]).checked_atan2(&tuple(&[1.0, 1.0])).unwrap();
        assert_eq!(quotients, tuple(&[std::f64::consts::FRAC_PI_4, 0.0]));
    }

    #[test]
    fn test_remainder_lanes() {
        let t = tuple(&[5.0, 3.5]);
        assert_eq!(
            t.checked_remainder(&tuple(&[3.0, 1.0])).unwrap(),
            tuple(&[-1.0, -0.5])
        );
        assert_eq!(t.remainder_real(2.0), tuple(&[1.0, -0.5]));
    }

    #[test]
    fn test_display_uses_shortest_representation() {
        let t = tuple(&[1.0, 0.001, 1.0e7]);
        assert_eq!(t.to_string(), "(1.0, 0.001, 1.0E7)");
    }

    #[test]
    fn test_format_rounded() {
        let t = tuple(&[std::f64::consts::PI, 2.0 / 3.0]);
        assert_eq!(t.format_rounded(3), "(3.14, 0.667)");
    }

    quickcheck::quickcheck! {
        fn prop_addition_commutes(xs: Vec<f64>, ys: Vec<f64>) -> TestResult {
            let n = xs.len().min(ys.len());
            if n == 0 {
                return TestResult::discard();
            }
            let xs = &xs[..n];
            let ys = &ys[..n];
            if xs.iter().chain(ys).any(|v| !v.is_finite()) {
                return TestResult::discard();
            }
            let a = Tuple::new(xs).unwrap();
            let b = Tuple::new(ys).unwrap();
            TestResult::from_bool(a.clone() + b.clone() == b + a)
        }

        fn prop_negated_addition_is_subtraction(xs: Vec<f64>, ys: Vec<f64>) -> TestResult {
            let n = xs.len().min(ys.len());
            if n == 0 {
                return TestResult::discard();
            }
            let xs = &xs[..n];
            let ys = &ys[..n];
            if xs.iter().chain(ys).any(|v| !v.is_finite()) {
                return TestResult::discard();
            }
            let a = Tuple::new(xs).unwrap();
            let b = Tuple::new(ys).unwrap();
            TestResult::from_bool(a.clone() + (-b.clone()) == a - b)
        }

        fn prop_double_negation_is_identity(xs: Vec<f64>) -> TestResult {
            if xs.is_empty() {
                return TestResult::discard();
            }
            let a = Tuple::new(&xs).unwrap();
            TestResult::from_bool(-(-a.clone()) == a)
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let t = tuple(&[1.5, -2.0, 0.25]);
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuple = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}

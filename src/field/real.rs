// ============================================================================
// Real Field
// f64 backend for the field element traits
// ============================================================================

use std::hash::Hasher;
use std::sync::{Arc, LazyLock};

use super::traits::{Field, FieldElement, RealFieldElement};

/// The field of double precision real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealField;

static INSTANCE: LazyLock<Arc<RealField>> = LazyLock::new(|| Arc::new(RealField));

impl RealField {
    /// Get the process-wide field handle.
    pub fn instance() -> Arc<RealField> {
        Arc::clone(&INSTANCE)
    }
}

impl Field for RealField {
    type Element = f64;

    fn zero(&self) -> f64 {
        0.0
    }

    fn one(&self) -> f64 {
        1.0
    }
}

impl FieldElement for f64 {
    type Field = RealField;

    fn field(&self) -> Arc<RealField> {
        RealField::instance()
    }

    fn reciprocal(&self) -> f64 {
        f64::recip(*self)
    }

    fn identical(&self, other: &f64) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn hash_component<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.to_bits());
    }
}

impl RealFieldElement for f64 {
    fn real(&self) -> f64 {
        *self
    }

    fn from_real(&self, value: f64) -> f64 {
        value
    }

    fn add_real(&self, a: f64) -> f64 {
        self + a
    }

    fn sub_real(&self, a: f64) -> f64 {
        self - a
    }

    fn mul_real(&self, a: f64) -> f64 {
        self * a
    }

    fn div_real(&self, a: f64) -> f64 {
        self / a
    }

    fn remainder(&self, rhs: &f64) -> f64 {
        libm::remainder(*self, *rhs)
    }

    fn remainder_real(&self, a: f64) -> f64 {
        libm::remainder(*self, a)
    }

    fn abs(&self) -> f64 {
        f64::abs(*self)
    }

    fn ceil(&self) -> f64 {
        f64::ceil(*self)
    }

    fn floor(&self) -> f64 {
        f64::floor(*self)
    }

    fn rint(&self) -> f64 {
        f64::round_ties_even(*self)
    }

    fn round(&self) -> i64 {
        f64::floor(self + 0.5) as i64
    }

    fn signum(&self) -> f64 {
        if self.is_nan() || *self == 0.0 {
            // signed zeros and NaN pass through unchanged
            *self
        } else {
            f64::copysign(1.0, *self)
        }
    }

    fn copy_sign(&self, sign: &f64) -> f64 {
        f64::copysign(*self, *sign)
    }

    fn copy_sign_real(&self, sign: f64) -> f64 {
        f64::copysign(*self, sign)
    }

    fn scalb(&self, n: i32) -> f64 {
        libm::scalbn(*self, n)
    }

    fn to_degrees(&self) -> f64 {
        f64::to_degrees(*self)
    }

    fn to_radians(&self) -> f64 {
        f64::to_radians(*self)
    }

    fn sqrt(&self) -> f64 {
        f64::sqrt(*self)
    }

    fn exp(&self) -> f64 {
        f64::exp(*self)
    }

    fn ln(&self) -> f64 {
        f64::ln(*self)
    }

    fn sin(&self) -> f64 {
        f64::sin(*self)
    }

    fn cos(&self) -> f64 {
        f64::cos(*self)
    }

    fn sin_cos(&self) -> (f64, f64) {
        f64::sin_cos(*self)
    }

    fn tan(&self) -> f64 {
        f64::tan(*self)
    }

    fn atan2(&self, x: &f64) -> f64 {
        f64::atan2(*self, *x)
    }

    fn hypot(&self, y: &f64) -> f64 {
        f64::hypot(*self, *y)
    }

    fn pow(&self, p: f64) -> f64 {
        f64::powf(*self, p)
    }

    fn powi(&self, n: i32) -> f64 {
        f64::powi(*self, n)
    }
}

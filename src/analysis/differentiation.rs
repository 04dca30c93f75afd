// ============================================================================
// Finite Differences
// Symmetric central-difference derivative schemes over field elements
// ============================================================================

use crate::field::RealFieldElement;
use crate::numeric::{MathError, MathResult};

/// First-derivative estimator using symmetric central differences.
///
/// The evaluation is generic over [`RealFieldElement`], so a
/// [`Tuple`](crate::field::Tuple) pushes several abscissae through a single
/// invocation, one per lane.
///
/// # Example
/// ```
/// use field_math::analysis::FiniteDifferences;
/// use field_math::field::{RealFieldElement, Tuple};
///
/// let scheme = FiniteDifferences::new(5, 1.0e-3).unwrap();
/// let x = Tuple::new(&[0.0, 1.0, 2.0]).unwrap();
/// let slope = scheme.derivative(|t: Tuple| t.sin(), &x);
/// assert!((slope.real() - 1.0).abs() < 1.0e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifferences {
    points: usize,
    step: f64,
}

impl FiniteDifferences {
    /// Create a scheme with the given stencil width and step size.
    ///
    /// # Errors
    /// Returns `InvalidInput` unless `points` is 3 or 5 and `step` is a
    /// finite positive number.
    pub fn new(points: usize, step: f64) -> MathResult<Self> {
        if points != 3 && points != 5 {
            return Err(MathError::InvalidInput);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(MathError::InvalidInput);
        }
        Ok(Self { points, step })
    }

    /// Number of stencil points.
    pub fn points(&self) -> usize {
        self.points
    }

    /// Step between stencil points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Estimate the derivative of `f` at `x`.
    pub fn derivative<T, F>(&self, f: F, x: &T) -> T
    where
        T: RealFieldElement,
        F: Fn(T) -> T,
    {
        let h = self.step;
        match self.points {
            3 => (f(x.add_real(h)) - f(x.sub_real(h))).div_real(2.0 * h),
            _ => {
                // (-f(x+2h) + 8 f(x+h) - 8 f(x-h) + f(x-2h)) / 12h
                let far_plus = f(x.add_real(2.0 * h));
                let near_plus = f(x.add_real(h));
                let near_minus = f(x.sub_real(h));
                let far_minus = f(x.sub_real(2.0 * h));
                ((near_plus - near_minus).mul_real(8.0) - (far_plus - far_minus))
                    .div_real(12.0 * h)
            },
        }
    }
}

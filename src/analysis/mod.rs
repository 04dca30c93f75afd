// ============================================================================
// Analysis Module
// Numerical analysis routines written against the field element traits
// ============================================================================

mod differentiation;

pub use differentiation::FiniteDifferences;

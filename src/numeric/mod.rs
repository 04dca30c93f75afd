// ============================================================================
// Numeric Module
// Shared error types for the arithmetic and formatting layers
// ============================================================================
//
// This module provides:
// - MathError: error types for tuple construction, access and arithmetic
// - MathResult: result alias used by every checked operation
//
// Design principles:
// - Checked operations return Result (no silent truncation or padding)
// - Operator sugar panics on contract violations, mirroring std ops
// - The string formatter is total and never surfaces an error

mod errors;

pub use errors::{MathError, MathResult};

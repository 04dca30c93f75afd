// ============================================================================
// Decimal Module
// Shortest round-trip decimal rendering of IEEE-754 doubles
// ============================================================================
//
// This module provides:
// - shortest / shortest_ranged: minimal-digit strings that parse back to
//   the exact original bit pattern
// - rounded: lossy rendering under a significant-digit budget
//
// Design principles:
// - Total functions: every bit pattern has a defined output, nothing panics
// - No big-integer arithmetic on the conversion path; 128-bit products
//   against pre-scaled power-of-five tables
// - Tables are built once, behind a concurrency-safe lazy initializer

mod pow5;
mod shortest;

pub use shortest::{rounded, shortest, shortest_ranged, DEFAULT_HIGH_EXP, DEFAULT_LOW_EXP};

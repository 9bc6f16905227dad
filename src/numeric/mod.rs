// ============================================================================
// Numeric Module
// Generic numeric vector with tolerance-based comparison
// ============================================================================
//
// This module provides:
// - Element: sealed trait over the built-in integer and float types
// - NumericVector<T>: dense, owned, resizable vector of elements
// - VectorError: Error types for vector operations
//
// Design principles:
// - Fallible operations return Result and never modify the receiver
// - Equality is approximate, governed by a per-vector tolerance
// - Integer element arithmetic wraps instead of panicking

mod element;
mod errors;
#[cfg(feature = "serde")]
mod serialization;
mod vector;

pub use element::Element;
pub use errors::{VectorError, VectorResult};
pub use vector::NumericVector;

// ============================================================================
// numvec Library
// Resizable numeric vectors with tolerance-based equality
// ============================================================================

//! # numvec
//!
//! A dense, owned, resizable vector over the built-in numeric types.
//!
//! ## Features
//!
//! - **Generic elements**: every integer and floating-point primitive
//! - **Approximate equality** governed by a per-vector tolerance
//! - **Checked arithmetic** returning `Result` for size and divisor errors
//! - **Linear algebra helpers**: dot product, norm, cross product, normalization
//! - **Optional serde support** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use numvec::prelude::*;
//!
//! let a = NumericVector::from([1.0, 2.0, 3.0]);
//! let b = NumericVector::from([4.0, 5.0, 6.0]);
//!
//! assert_eq!(a.dot(&b).unwrap(), 32.0);
//! assert!((a.norm() - 14.0f64.sqrt()).abs() < 1e-9);
//!
//! let c = cross_product(&a, &b).unwrap();
//! println!("a x b = {}", c);
//!
//! let unit = normalize(&c).unwrap();
//! assert!((unit.norm() - 1.0).abs() < 1e-12);
//!
//! assert_eq!(a.checked_div(0.0), Err(VectorError::DivideByZero));
//! ```

pub mod config;
pub mod numeric;
pub mod operations;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{VectorConfig, DEFAULT_TOLERANCE};
    pub use crate::numeric::{Element, NumericVector, VectorError, VectorResult};
    pub use crate::operations::{angle_between, cross_product, distance, normalize};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_workflow() {
        let mut v = NumericVector::<f64>::zeros(2);
        v.set(0, 3.0).unwrap();
        v.set(1, 4.0).unwrap();
        v.resize_with_value(3, 0.0);

        let w = NumericVector::from([0.0, 0.0, 1.0]);
        let c = cross_product(&v, &w).unwrap();
        assert_eq!(c, NumericVector::from([4.0, -3.0, 0.0]));

        let unit = normalize(&c).unwrap();
        assert_eq!(unit.to_string(), "[0.8, -0.6, 0]");

        let doubled = &unit * 2.0;
        assert!((doubled.norm() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_failures_leave_receiver_unchanged() {
        let mut v = NumericVector::from([1, 2, 3]);
        let snapshot = v.clone();

        assert!(v.set(3, 9).is_err());
        assert!(v.checked_div(0).is_err());
        assert!(v.checked_add(&NumericVector::zeros(2)).is_err());
        assert!(v.set_tolerance(-1.0).is_err());

        assert_eq!(v.as_slice(), snapshot.as_slice());
        assert_eq!(v.tolerance(), snapshot.tolerance());
    }
}

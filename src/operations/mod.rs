// ============================================================================
// Operations Module
// Free functions built on the public NumericVector contract
// ============================================================================

mod vector_ops;

pub use vector_ops::{angle_between, cross_product, distance, normalize};

// ============================================================================
// Vector Configuration
// Construction-time settings shared by vectors
// ============================================================================

use crate::numeric::{VectorError, VectorResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance a vector starts with unless configured otherwise.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Check that a tolerance is finite and non-negative.
pub(crate) fn check_tolerance(tolerance: f64) -> VectorResult<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(VectorError::InvalidTolerance(tolerance))
    }
}

/// Configuration applied when a vector is created.
///
/// # Example
/// ```
/// use numvec::config::VectorConfig;
/// use numvec::numeric::NumericVector;
///
/// let config = VectorConfig::default().with_tolerance(1e-6);
/// let v = NumericVector::with_config(3, 0.0f64, &config).unwrap();
/// assert_eq!(v.tolerance(), 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorConfig {
    /// Epsilon used for approximate equality and zero-divisor detection
    pub tolerance: f64,
}

impl VectorConfig {
    /// Create a configuration with the given tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Replace the tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `InvalidTolerance` if the tolerance is negative, NaN or infinite.
    pub fn validate(&self) -> VectorResult<()> {
        check_tolerance(self.tolerance)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

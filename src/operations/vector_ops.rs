// ============================================================================
// Vector Operations
// Cross product, normalization and derived geometric quantities
// ============================================================================

use crate::numeric::{Element, NumericVector, VectorError, VectorResult};

fn require_len<T: Element>(v: &NumericVector<T>, expected: usize) -> VectorResult<()> {
    if v.len() == expected {
        Ok(())
    } else {
        tracing::debug!(
            expected,
            actual = v.len(),
            "rejected vector operation: dimension mismatch"
        );
        Err(VectorError::DimensionMismatch {
            expected,
            actual: v.len(),
        })
    }
}

fn require_same_len<T: Element>(a: &NumericVector<T>, b: &NumericVector<T>) -> VectorResult<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        tracing::debug!(
            left = a.len(),
            right = b.len(),
            "rejected vector operation: size mismatch"
        );
        Err(VectorError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

/// 3-D cross product `a × b`.
///
/// The result has `a`'s tolerance.
///
/// # Errors
/// Returns `DimensionMismatch` unless both vectors have exactly 3 elements.
///
/// # Example
/// ```
/// use numvec::numeric::NumericVector;
/// use numvec::operations::cross_product;
///
/// let x = NumericVector::from([1.0, 0.0, 0.0]);
/// let y = NumericVector::from([0.0, 1.0, 0.0]);
/// assert_eq!(cross_product(&x, &y).unwrap(), NumericVector::from([0.0, 0.0, 1.0]));
/// ```
pub fn cross_product<T: Element>(
    a: &NumericVector<T>,
    b: &NumericVector<T>,
) -> VectorResult<NumericVector<T>> {
    require_len(a, 3)?;
    require_len(b, 3)?;

    let (a0, a1, a2) = (a[0], a[1], a[2]);
    let (b0, b1, b2) = (b[0], b[1], b[2]);

    let mut result = NumericVector::from([
        a1.elem_mul(b2).elem_sub(a2.elem_mul(b1)),
        a2.elem_mul(b0).elem_sub(a0.elem_mul(b2)),
        a0.elem_mul(b1).elem_sub(a1.elem_mul(b0)),
    ]);
    result.set_tolerance(a.tolerance())?;
    Ok(result)
}

/// Scale `v` to unit length by dividing it by its norm.
///
/// Integer vectors divide by their truncated norm.
///
/// # Errors
/// Returns `DivideByZero` when the norm is within `v`'s tolerance of zero.
pub fn normalize<T: Element>(v: &NumericVector<T>) -> VectorResult<NumericVector<T>> {
    v.checked_div(v.norm())
}

/// Euclidean distance between `a` and `b`, computed in `f64`.
///
/// # Errors
/// Returns `SizeMismatch` if the lengths differ.
pub fn distance<T: Element>(a: &NumericVector<T>, b: &NumericVector<T>) -> VectorResult<f64> {
    require_same_len(a, b)?;
    let sum_sq: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.to_f64() - y.to_f64();
            d * d
        })
        .sum();
    Ok(sum_sq.sqrt())
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
///
/// Dot product and norms are all accumulated in `f64`, so integer inputs
/// never wrap.
///
/// # Errors
/// - `SizeMismatch` if the lengths differ
/// - `DivideByZero` if either vector's norm is within its tolerance of zero
pub fn angle_between<T: Element>(
    a: &NumericVector<T>,
    b: &NumericVector<T>,
) -> VectorResult<f64> {
    require_same_len(a, b)?;
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| x.to_f64() * y.to_f64())
        .sum();
    let norm_a = f64_norm(a);
    let norm_b = f64_norm(b);
    if norm_a <= a.tolerance() || norm_b <= b.tolerance() {
        return Err(VectorError::DivideByZero);
    }
    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0).acos())
}

fn f64_norm<T: Element>(v: &NumericVector<T>) -> f64 {
    v.iter()
        .map(|&x| {
            let x = x.to_f64();
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

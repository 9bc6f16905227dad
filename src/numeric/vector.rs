// ============================================================================
// Numeric Vector
// Dense, owned, resizable vector with tolerance-based equality
// ============================================================================

use super::element::Element;
use super::errors::{VectorError, VectorResult};
use crate::config::{check_tolerance, VectorConfig, DEFAULT_TOLERANCE};
use std::fmt;
use std::mem;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// Dense vector of numeric elements with a per-instance comparison tolerance.
///
/// The vector exclusively owns its buffer. Cloning produces an independent
/// buffer with the same tolerance; [`NumericVector::take`] moves the buffer
/// out and leaves an empty vector behind.
///
/// # Equality
/// `==` is approximate: two vectors are equal when their lengths match and
/// every pair of elements, widened to `f64`, differs by no more than the
/// larger of the two tolerances. Vectors of different lengths are unequal.
///
/// # Example
/// ```
/// use numvec::numeric::NumericVector;
///
/// let a = NumericVector::filled(3, 2);
/// let b = NumericVector::filled(3, 5);
/// let sum = a.checked_add(&b).unwrap();
/// assert_eq!(sum, NumericVector::filled(3, 7));
/// assert_eq!(sum.to_string(), "[7, 7, 7]");
/// ```
#[derive(Clone)]
pub struct NumericVector<T: Element> {
    data: Box<[T]>,
    tolerance: f64,
}

impl<T: Element> NumericVector<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty vector.
    #[inline]
    pub fn new() -> Self {
        Self::from_boxed(Box::default())
    }

    /// Create a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::ZERO)
    }

    /// Create a vector of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_boxed(vec![value; len].into_boxed_slice())
    }

    /// Create a vector by copying a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_boxed(values.into())
    }

    /// Create a vector of `len` copies of `value` using the settings in `config`.
    ///
    /// # Errors
    /// Returns `InvalidTolerance` if the configured tolerance is invalid.
    pub fn with_config(len: usize, value: T, config: &VectorConfig) -> VectorResult<Self> {
        config.validate()?;
        let mut vector = Self::filled(len, value);
        vector.tolerance = config.tolerance;
        Ok(vector)
    }

    #[inline]
    fn from_boxed(data: Box<[T]>) -> Self {
        Self {
            data,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current comparison tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Replace the comparison tolerance.
    ///
    /// Takes effect for every subsequent comparison and division.
    ///
    /// # Errors
    /// Returns `InvalidTolerance` for negative, NaN or infinite values; the
    /// current tolerance is kept.
    pub fn set_tolerance(&mut self, tolerance: f64) -> VectorResult<()> {
        if let Err(err) = check_tolerance(tolerance) {
            tracing::debug!(tolerance, "rejected tolerance change");
            return Err(err);
        }
        tracing::trace!(from = self.tolerance, to = tolerance, "tolerance changed");
        self.tolerance = tolerance;
        Ok(())
    }

    /// Element at `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> VectorResult<T> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> VectorResult<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> VectorResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) -> VectorResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(VectorError::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the vector and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Resize to `new_len`, filling new slots with zero.
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with_value(new_len, T::ZERO);
    }

    /// Resize to `new_len`.
    ///
    /// The first `min(len, new_len)` elements keep their positions. When
    /// growing, slots `[len, new_len)` are set to `fill`; when shrinking, the
    /// tail is dropped. The old buffer is replaced in one assignment.
    pub fn resize_with_value(&mut self, new_len: usize, fill: T) {
        let old_len = self.len();
        if new_len == old_len {
            return;
        }

        let mut buffer = Vec::with_capacity(new_len);
        buffer.extend_from_slice(&self.data[..old_len.min(new_len)]);
        buffer.resize(new_len, fill);
        self.data = buffer.into_boxed_slice();

        tracing::debug!(old_len, new_len, "vector resized");
    }

    /// Move the contents out, leaving an empty vector with the same tolerance.
    pub fn take(&mut self) -> Self {
        Self {
            data: mem::take(&mut self.data),
            tolerance: self.tolerance,
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    fn check_same_len(&self, rhs: &Self) -> VectorResult<()> {
        if self.len() == rhs.len() {
            Ok(())
        } else {
            tracing::debug!(
                left = self.len(),
                right = rhs.len(),
                "rejected vector operation: size mismatch"
            );
            Err(VectorError::SizeMismatch {
                left: self.len(),
                right: rhs.len(),
            })
        }
    }

    fn map_elements(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            tolerance: self.tolerance,
        }
    }

    fn zip_elements(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> VectorResult<Self> {
        self.check_same_len(rhs)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            tolerance: self.tolerance,
        })
    }

    /// Element-wise sum. The result keeps the receiver's tolerance.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn checked_add(&self, rhs: &Self) -> VectorResult<Self> {
        self.zip_elements(rhs, T::elem_add)
    }

    /// Element-wise difference. The result keeps the receiver's tolerance.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn checked_sub(&self, rhs: &Self) -> VectorResult<Self> {
        self.zip_elements(rhs, T::elem_sub)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.map_elements(|x| x.elem_mul(scalar))
    }

    /// Divide every element by `scalar`.
    ///
    /// A floating-point divisor is rejected when `|scalar|` is within this
    /// vector's tolerance; an integer divisor only when it is zero.
    ///
    /// # Errors
    /// Returns `DivideByZero` for a rejected divisor.
    pub fn checked_div(&self, scalar: T) -> VectorResult<Self> {
        if scalar.is_zero_divisor(self.tolerance) {
            tracing::debug!(
                divisor = %scalar,
                tolerance = self.tolerance,
                "rejected vector division: zero divisor"
            );
            return Err(VectorError::DivideByZero);
        }
        Ok(self.map_elements(|x| x.elem_div(scalar)))
    }

    /// Dot product, accumulated in `T`.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn dot(&self, rhs: &Self) -> VectorResult<T> {
        self.check_same_len(rhs)?;
        Ok(self
            .data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc.elem_add(a.elem_mul(b))))
    }

    /// Euclidean norm.
    ///
    /// The sum of squares is accumulated in `T` and its square root taken in
    /// `f64`. Integer results are truncated toward zero.
    pub fn norm(&self) -> T {
        let sum_sq = self
            .data
            .iter()
            .fold(T::ZERO, |acc, &x| acc.elem_add(x.elem_mul(x)));
        T::from_f64(sum_sq.to_f64().sqrt())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Approximate equality under `max(self.tolerance, rhs.tolerance)`.
    pub fn approx_eq(&self, rhs: &Self) -> bool {
        if self.len() != rhs.len() {
            return false;
        }
        let tolerance = self.tolerance.max(rhs.tolerance);
        self.data
            .iter()
            .zip(rhs.data.iter())
            .all(|(&a, &b)| (a.to_f64() - b.to_f64()).abs() <= tolerance)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Element> Default for NumericVector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for NumericVector<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T: Element> Index<usize> for NumericVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Element> IndexMut<usize> for NumericVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Element> AsRef<[T]> for NumericVector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> From<Vec<T>> for NumericVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_boxed(values.into_boxed_slice())
    }
}

impl<T: Element, const N: usize> From<[T; N]> for NumericVector<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: Element> From<&[T]> for NumericVector<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Element> FromIterator<T> for NumericVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_boxed(iter.into_iter().collect())
    }
}

impl<T: Element> IntoIterator for NumericVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a NumericVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a mut NumericVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Infallible operators for ergonomics (panic on size mismatch or zero divisor - use checked_* otherwise)
impl<T: Element> Add for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("NumericVector addition size mismatch")
    }
}

impl<T: Element> Add for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Element> Sub for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("NumericVector subtraction size mismatch")
    }
}

impl<T: Element> Sub for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Element> Mul<T> for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: Element> Mul<T> for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: Element> Div<T> for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn div(self, scalar: T) -> Self::Output {
        self.checked_div(scalar)
            .expect("NumericVector division by zero")
    }
}

impl<T: Element> Div<T> for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn div(self, scalar: T) -> Self::Output {
        &self / scalar
    }
}

// Signed integers and floats only
impl<T: Element + Neg<Output = T>> Neg for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map_elements(|x| T::ZERO.elem_sub(x))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: Element> fmt::Display for NumericVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: Element> fmt::Debug for NumericVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericVector")
            .field("len", &self.len())
            .field("tolerance", &self.tolerance)
            .field("data", &self.data)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

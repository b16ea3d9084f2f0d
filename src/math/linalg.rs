//! Linear algebra backend abstraction for weighted least squares.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense linear
//! algebra primitives the estimator needs (transpose, multiply, inverse),
//! delegating to the nalgebra backend.
//!
//! ## Design notes
//!
//! * Matrices cross the trait boundary as row-major slices with explicit
//!   dimensions, so the rest of the crate stays generic over `num_traits::Float`.
//! * The normal matrix is inverted explicitly (LU via `try_inverse`). There is
//!   no QR or SVD fallback: a singular matrix is reported, not repaired.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
///
/// All matrices are row-major.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Transpose an `rows`×`cols` matrix.
    fn transpose(a: &[Self], rows: usize, cols: usize) -> Vec<Self>;
    /// Multiply an `rows`×`inner` matrix by an `inner`×`cols` matrix.
    fn mat_mul(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize) -> Vec<Self>;
    /// Multiply an `rows`×`cols` matrix by a vector of length `cols`.
    fn mat_vec(a: &[Self], v: &[Self], rows: usize, cols: usize) -> Vec<Self>;
    /// Invert a square `n`×`n` matrix, `None` when it is singular.
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn transpose(a: &[Self], rows: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::transpose(a, rows, cols)
    }
    #[inline]
    fn mat_mul(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::mat_mul(a, b, rows, inner, cols)
    }
    #[inline]
    fn mat_vec(a: &[Self], v: &[Self], rows: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::mat_vec(a, v, rows, cols)
    }
    #[inline]
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert(a, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn transpose(a: &[Self], rows: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::transpose(a, rows, cols)
    }
    #[inline]
    fn mat_mul(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::mat_mul(a, b, rows, inner, cols)
    }
    #[inline]
    fn mat_vec(a: &[Self], v: &[Self], rows: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::mat_vec(a, v, rows, cols)
    }
    #[inline]
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert(a, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;
    #[cfg(feature = "std")]
    use std::vec::Vec;

    use nalgebra::{DMatrix, DVector, RealField};

    /// Flatten an nalgebra matrix (column-major storage) into row-major order.
    fn to_row_major<T: RealField + Copy>(m: &DMatrix<T>) -> Vec<T> {
        m.transpose().as_slice().to_vec()
    }

    /// Transpose a row-major matrix.
    pub fn transpose<T: RealField + Copy>(a: &[T], rows: usize, cols: usize) -> Vec<T> {
        let matrix = DMatrix::from_row_slice(rows, cols, a);
        to_row_major(&matrix.transpose())
    }

    /// Multiply two row-major matrices.
    pub fn mat_mul<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        rows: usize,
        inner: usize,
        cols: usize,
    ) -> Vec<T> {
        let lhs = DMatrix::from_row_slice(rows, inner, a);
        let rhs = DMatrix::from_row_slice(inner, cols, b);
        to_row_major(&(lhs * rhs))
    }

    /// Multiply a row-major matrix by a vector.
    pub fn mat_vec<T: RealField + Copy>(a: &[T], v: &[T], rows: usize, cols: usize) -> Vec<T> {
        let matrix = DMatrix::from_row_slice(rows, cols, a);
        let vector = DVector::from_column_slice(v);
        (matrix * vector).as_slice().to_vec()
    }

    /// Invert a square row-major matrix.
    pub fn invert<T: RealField + Copy>(a: &[T], n: usize) -> Option<Vec<T>> {
        DMatrix::from_row_slice(n, n, a)
            .try_inverse()
            .map(|inv| to_row_major(&inv))
    }
}

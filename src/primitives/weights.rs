//! Observation weight matrices.
//!
//! ## Purpose
//!
//! This module defines `WeightMatrix`, the representation of the n×n
//! observation weight matrix P used by the weighted least-squares estimator.
//! Callers may describe P compactly (identity, diagonal) or densely (full).
//!
//! ## Design notes
//!
//! * **Materialised**: Every form is expanded into a dense row-major n×n
//!   matrix before the fit, so all forms produce identical results for
//!   equivalent matrices.
//! * **Unchecked semantics**: Symmetry and positive-definiteness are the
//!   caller's responsibility; only shape and finiteness are checked.
//!
//! ## Invariants
//!
//! * A dense matrix produced by `to_dense(n)` always has exactly n*n entries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Weight Matrix
// ============================================================================

/// Observation weight matrix P.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeightMatrix<T> {
    /// Equal, uncorrelated observations (P = I).
    #[default]
    Identity,

    /// Uncorrelated observations with individual weights (P = diag(w)).
    Diagonal(Vec<T>),

    /// Dense row-major n×n weight matrix.
    Full(Vec<T>),
}

impl<T: Float> WeightMatrix<T> {
    /// Explicitly stored entries (empty for the identity).
    pub fn entries(&self) -> &[T] {
        match self {
            WeightMatrix::Identity => &[],
            WeightMatrix::Diagonal(w) | WeightMatrix::Full(w) => w.as_slice(),
        }
    }

    /// Number of stored entries required for `n` observations.
    pub fn expected_len(&self, n: usize) -> usize {
        match self {
            WeightMatrix::Identity => 0,
            WeightMatrix::Diagonal(_) => n,
            WeightMatrix::Full(_) => n * n,
        }
    }

    /// Check that the stored entries match `n` observations.
    pub fn check_shape(&self, n: usize) -> Result<(), PolyFitError> {
        let got = self.entries().len();
        let expected = self.expected_len(n);
        if got != expected {
            return Err(PolyFitError::WeightShape { got, expected });
        }
        Ok(())
    }

    /// Expand into a dense row-major n×n matrix.
    pub fn to_dense(&self, n: usize) -> Result<Vec<T>, PolyFitError> {
        self.check_shape(n)?;

        let dense = match self {
            WeightMatrix::Identity => {
                let mut p = vec![T::zero(); n * n];
                for i in 0..n {
                    p[i * n + i] = T::one();
                }
                p
            }
            WeightMatrix::Diagonal(w) => {
                let mut p = vec![T::zero(); n * n];
                for (i, &wi) in w.iter().enumerate() {
                    p[i * n + i] = wi;
                }
                p
            }
            WeightMatrix::Full(p) => p.clone(),
        };

        Ok(dense)
    }
}

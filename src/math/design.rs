//! Polynomial design (Vandermonde) matrices.
//!
//! ## Purpose
//!
//! This module builds the design matrix that expresses a polynomial model
//! linearly in its coefficients, and evaluates fitted polynomials.
//!
//! ## Key concepts
//!
//! * **Increasing powers**: Row i is `[1, a_i, a_i², …, a_i^deg]`, constant
//!   term first, so column j holds `a_i^j`.
//! * **Cumulative products**: Powers are built by repeated multiplication
//!   rather than `powi`, one column from the previous.
//!
//! ## Invariants
//!
//! * The design matrix is row-major with `a.len()` rows and `degree + 1` columns.
//! * The first column is all ones, including for `a_i = 0`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Design Matrix
// ============================================================================

/// Build the row-major Vandermonde design matrix for `a` and `degree`.
pub fn vandermonde<T: Float>(a: &[T], degree: usize) -> Vec<T> {
    let m = degree + 1;
    let mut design = Vec::with_capacity(a.len() * m);

    for &ai in a {
        let mut power = T::one();
        design.push(power);
        for _ in 0..degree {
            power = power * ai;
            design.push(power);
        }
    }

    design
}

/// Evaluate the polynomial with increasing-power `coefficients` at `t` (Horner's rule).
pub fn evaluate<T: Float>(coefficients: &[T], t: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * t + c)
}

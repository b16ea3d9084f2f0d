//! Weighted least-squares estimation via the normal equations.
//!
//! ## Purpose
//!
//! This module implements the estimator itself. Given samples `a`,
//! observations `l`, a dense weight matrix `P` and a degree, it solves
//!
//! ```text
//! N     = Aᵗ·P·A
//! x     = N⁻¹·Aᵗ·P·l
//! v     = A·x − l
//! cov_x = N⁻¹
//! apv   = vᵗ·P·v / (n − m)
//! ```
//!
//! where `A` is the n×m Vandermonde design matrix and m = degree + 1.
//!
//! ## Design notes
//!
//! * **Explicit inverse**: N is inverted and the inverse is reused for both the
//!   estimate and the covariance. This squares the condition number of A;
//!   results match a direct `inv(N)` evaluation rather than a QR solve.
//! * **Unscaled covariance**: `cov_x` is N⁻¹ only. Scaling by `apv` is left to
//!   the caller (see `PolyFitResult::scaled_covariance`).
//! * **Residual sign**: residuals are fitted minus observed.
//! * **Diagnostics**: the design matrix is emitted at `debug` level and the
//!   normal matrix at `trace` level through the `log` facade.
//!
//! ## Invariants
//!
//! * Inputs are assumed validated (see `engine::validator`): n ≥ m, P is n×n.
//! * When n == m the variance factor is NaN (zero degrees of freedom).
//!
//! ## Non-goals
//!
//! * No regularisation, pivoting, or rank-deficiency handling.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};

// Internal dependencies
use crate::math::design;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Solution
// ============================================================================

/// Raw output of a normal-equation solve.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalSolution<T> {
    /// Row-major n×m design matrix A.
    pub design: Vec<T>,
    /// Estimated coefficients x (increasing powers).
    pub coefficients: Vec<T>,
    /// Row-major m×m inverse normal matrix N⁻¹.
    pub covariance: Vec<T>,
    /// Fitted values A·x.
    pub fitted: Vec<T>,
    /// Residuals v = A·x − l.
    pub residuals: Vec<T>,
    /// A posteriori variance factor.
    pub variance_factor: T,
}

// ============================================================================
// Normal Equations
// ============================================================================

/// Inputs of a single weighted polynomial fit.
pub struct NormalEquations<'a, T: FloatLinalg> {
    /// Sample points a.
    pub samples: &'a [T],
    /// Observations l.
    pub observations: &'a [T],
    /// Dense row-major n×n weight matrix P.
    pub weights: &'a [T],
    /// Polynomial degree.
    pub degree: usize,
}

impl<'a, T: FloatLinalg> NormalEquations<'a, T> {
    /// Create a new set of normal equations.
    pub fn new(samples: &'a [T], observations: &'a [T], weights: &'a [T], degree: usize) -> Self {
        Self {
            samples,
            observations,
            weights,
            degree,
        }
    }

    /// Number of observations n.
    #[inline]
    pub fn n_observations(&self) -> usize {
        self.observations.len()
    }

    /// Number of parameters m = degree + 1.
    #[inline]
    pub fn n_parameters(&self) -> usize {
        self.degree + 1
    }

    /// Solve the normal equations.
    pub fn solve(&self) -> Result<NormalSolution<T>, PolyFitError> {
        let n = self.n_observations();
        let m = self.n_parameters();

        // Step 1: design matrix
        let design = design::vandermonde(self.samples, self.degree);
        debug!("design matrix A ({n}x{m}): {design:?}");

        // Step 2: N = AᵗP·A
        let at = T::transpose(&design, n, m);
        let at_p = T::mat_mul(&at, self.weights, m, n, n);
        let normal = T::mat_mul(&at_p, &design, m, n, m);
        trace!("normal matrix N ({m}x{m}): {normal:?}");

        // Step 3: x = (N⁻¹·AᵗP)·l
        let normal_inv = T::invert(&normal, m).ok_or(PolyFitError::SingularMatrix { size: m })?;
        let gain = T::mat_mul(&normal_inv, &at_p, m, m, n);
        let coefficients = T::mat_vec(&gain, self.observations, m, n);

        // Step 4: v = A·x − l
        let fitted = T::mat_vec(&design, &coefficients, n, m);
        let residuals: Vec<T> = fitted
            .iter()
            .zip(self.observations.iter())
            .map(|(&f, &l)| f - l)
            .collect();

        // Steps 5-6: cov_x = N⁻¹, apv = vᵗPv / (n − m)
        let variance_factor = variance_factor(&residuals, self.weights, n.saturating_sub(m));

        Ok(NormalSolution {
            design,
            coefficients,
            covariance: normal_inv,
            fitted,
            residuals,
            variance_factor,
        })
    }
}

// ============================================================================
// Variance Factor
// ============================================================================

/// Weighted residual sum of squares vᵗ·P·v.
pub fn weighted_rss<T: FloatLinalg>(residuals: &[T], weights: &[T]) -> T {
    let n = residuals.len();
    let pv = T::mat_vec(weights, residuals, n, n);
    residuals
        .iter()
        .zip(pv.iter())
        .fold(T::zero(), |acc, (&v, &p)| acc + v * p)
}

/// A posteriori variance factor vᵗ·P·v / dof.
///
/// Returns NaN when `dof` is zero.
pub fn variance_factor<T: FloatLinalg>(residuals: &[T], weights: &[T], dof: usize) -> T {
    if dof == 0 {
        return T::nan();
    }
    weighted_rss(residuals, weights) / T::from(dof).unwrap_or_else(T::nan)
}

//! Output types for weighted polynomial fits.
//!
//! ## Purpose
//!
//! This module defines `PolyFitResult`, which carries the estimated
//! coefficients, their (unscaled) covariance, the a posteriori variance
//! factor and the residuals, plus derived quantities computed on demand.
//!
//! ## Design notes
//!
//! * **Unscaled covariance**: `covariance` is N⁻¹. Callers wanting the
//!   absolute covariance use `scaled_covariance()`.
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `coefficients.len() == n_parameters`.
//! * `covariance.len() == n_parameters * n_parameters` (row-major).
//! * `residuals.len() == n_observations`.
//! * `variance_factor` is NaN exactly when `n_observations == n_parameters`.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit; it only stores and derives.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::normal::NormalSolution;
use crate::math::design;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a weighted least-squares polynomial fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitResult<T> {
    /// Estimated coefficients x, constant term first.
    pub coefficients: Vec<T>,

    /// Row-major m×m inverse normal matrix N⁻¹ (not scaled by the variance factor).
    pub covariance: Vec<T>,

    /// A posteriori variance factor vᵗ·P·v / (n − m).
    pub variance_factor: T,

    /// Residuals v = A·x − l (fitted minus observed).
    pub residuals: Vec<T>,

    /// Fitted values A·x, when requested.
    pub fitted: Option<Vec<T>>,

    /// Row-major n×m design matrix, when requested.
    pub design_matrix: Option<Vec<T>>,

    /// Number of observations n.
    pub n_observations: usize,

    /// Number of estimated parameters m.
    pub n_parameters: usize,
}

impl<T: Float> PolyFitResult<T> {
    /// Assemble a result from a solver output.
    pub fn from_solution(
        solution: NormalSolution<T>,
        return_fitted: bool,
        return_design_matrix: bool,
    ) -> Self {
        let n_observations = solution.residuals.len();
        let n_parameters = solution.coefficients.len();

        Self {
            coefficients: solution.coefficients,
            covariance: solution.covariance,
            variance_factor: solution.variance_factor,
            residuals: solution.residuals,
            fitted: return_fitted.then_some(solution.fitted),
            design_matrix: return_design_matrix.then_some(solution.design),
            n_observations,
            n_parameters,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// Redundancy n − m.
    pub fn degrees_of_freedom(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Entry (i, j) of the unscaled covariance matrix.
    pub fn covariance_at(&self, i: usize, j: usize) -> T {
        self.covariance[i * self.n_parameters + j]
    }

    /// Covariance scaled by the variance factor, apv · N⁻¹.
    pub fn scaled_covariance(&self) -> Vec<T> {
        self.covariance
            .iter()
            .map(|&c| c * self.variance_factor)
            .collect()
    }

    /// Standard errors sqrt(apv · (N⁻¹)_jj) of the coefficients.
    pub fn standard_errors(&self) -> Vec<T> {
        (0..self.n_parameters)
            .map(|j| (self.covariance_at(j, j) * self.variance_factor).sqrt())
            .collect()
    }

    /// Evaluate the fitted polynomial at `t`.
    pub fn evaluate(&self, t: T) -> T {
        design::evaluate(&self.coefficients, t)
    }

    /// Split into the `(x, cov_x, apv, v)` tuple.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, T, Vec<T>) {
        (
            self.coefficients,
            self.covariance,
            self.variance_factor,
            self.residuals,
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for PolyFitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations:       {}", self.n_observations)?;
        writeln!(f, "  Degree:             {}", self.degree())?;
        writeln!(f, "  Degrees of freedom: {}", self.degrees_of_freedom())?;
        writeln!(f, "  Variance factor:    {}", self.variance_factor)?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "{:>8} {:>14} {:>14}", "Power", "Estimate", "Std_Err")?;
        writeln!(f, "{:-<width$}", "", width = 38)?;
        let std_errors = self.standard_errors();
        for (j, (&c, &se)) in self.coefficients.iter().zip(std_errors.iter()).enumerate() {
            writeln!(f, "{:>8} {:>14.6} {:>14.6}", j, c, se)?;
        }
        writeln!(f)?;

        writeln!(f, "Residuals:")?;
        let has_fitted = self.fitted.is_some();
        write!(f, "{:>8} {:>12}", "Index", "Residual")?;
        if has_fitted {
            write!(f, " {:>12}", "Fitted")?;
        }
        writeln!(f)?;
        let line_width = 21 + if has_fitted { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 if more than 20 points
        let n = self.residuals.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8} {:>12.6}", idx, self.residuals[idx])?;
            if let Some(fitted) = &self.fitted {
                write!(f, " {:>12.6}", fitted[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

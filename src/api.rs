//! High-level API for weighted polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call
//! [`fit_polynomial`] function and the fluent [`PolyFitBuilder`] for callers
//! who want a reusable, configured model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated by `.build()`; data-dependent
//!   checks run in `.fit()` before any arithmetic.
//! * **Type-Safe**: Generic over `FloatLinalg` types (f32 and f64).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFitBuilder`] via `PolyFit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.weights()`, etc.).
//! 3. Call `.build()` to obtain a [`PolyFitModel`], then `.fit(&a, &l)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::normal::NormalEquations;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::PolyFitResult;
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::PolyFitError;
pub use crate::primitives::weights::WeightMatrix;

// ============================================================================
// One-call Entry Point
// ============================================================================

/// Fit a polynomial of degree `deg` to observations `l` at samples `a` under
/// the row-major n×n weight matrix `p`.
///
/// Equivalent to
/// `PolyFit::new().degree(deg).weights(WeightMatrix::Full(p.to_vec())).build()?.fit(a, l)`.
///
/// # Errors
///
/// * [`PolyFitError::EmptyInput`], [`PolyFitError::MismatchedInputs`] or
///   [`PolyFitError::WeightShape`] for inconsistent shapes.
/// * [`PolyFitError::InvalidNumericValue`] for NaN or infinite inputs.
/// * [`PolyFitError::DegenerateDegree`] when `a.len() < deg + 1`.
/// * [`PolyFitError::SingularMatrix`] when Aᵗ·P·A cannot be inverted.
pub fn fit_polynomial<T: FloatLinalg>(
    a: &[T],
    l: &[T],
    p: &[T],
    deg: usize,
) -> Result<PolyFitResult<T>, PolyFitError> {
    PolyFitBuilder::new()
        .degree(deg)
        .weights(WeightMatrix::Full(p.to_vec()))
        .build()?
        .fit(a, l)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a weighted polynomial fit.
#[derive(Debug, Clone)]
pub struct PolyFitBuilder<T: FloatLinalg> {
    /// Polynomial degree (default: 1).
    pub degree: Option<usize>,

    /// Observation weight matrix (default: identity).
    pub weights: Option<WeightMatrix<T>>,

    /// Keep the design matrix in the result.
    pub return_design_matrix: Option<bool>,

    /// Keep the fitted values A·x in the result.
    pub return_fitted: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for PolyFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> PolyFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            weights: None,
            return_design_matrix: None,
            return_fitted: None,
            duplicate_param: None,
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the observation weight matrix.
    pub fn weights(mut self, weights: WeightMatrix<T>) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights);
        self
    }

    /// Include the design matrix in the result.
    pub fn return_design_matrix(mut self) -> Self {
        if self.return_design_matrix.is_some() {
            self.duplicate_param = Some("return_design_matrix");
        }
        self.return_design_matrix = Some(true);
        self
    }

    /// Include the fitted values in the result.
    pub fn return_fitted(mut self) -> Self {
        if self.return_fitted.is_some() {
            self.duplicate_param = Some("return_fitted");
        }
        self.return_fitted = Some(true);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<PolyFitModel<T>, PolyFitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let weights = self.weights.unwrap_or_default();
        Validator::validate_weight_layout(&weights)?;

        Ok(PolyFitModel {
            degree: self.degree.unwrap_or(1),
            weights,
            return_design_matrix: self.return_design_matrix.unwrap_or(false),
            return_fitted: self.return_fitted.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured weighted polynomial fit, reusable across data sets.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitModel<T> {
    degree: usize,
    weights: WeightMatrix<T>,
    return_design_matrix: bool,
    return_fitted: bool,
}

impl<T: FloatLinalg> PolyFitModel<T> {
    /// Configured polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Configured weight matrix.
    pub fn weights(&self) -> &WeightMatrix<T> {
        &self.weights
    }

    /// Fit the polynomial to observations `l` taken at samples `a`.
    pub fn fit(&self, a: &[T], l: &[T]) -> Result<PolyFitResult<T>, PolyFitError> {
        Validator::validate_inputs(a, l)?;
        let n = l.len();
        Validator::validate_weights(&self.weights, n)?;
        Validator::validate_degree(n, self.degree)?;

        let p: Vec<T> = self.weights.to_dense(n)?;
        let solution = NormalEquations::new(a, l, &p, self.degree).solve()?;

        Ok(PolyFitResult::from_solution(
            solution,
            self.return_fitted,
            self.return_design_matrix,
        ))
    }
}

//! Input validation for weighted polynomial fitting.
//!
//! ## Purpose
//!
//! This module checks the shape and content of the fit inputs before any
//! arithmetic runs, so that a malformed call fails with a descriptive error
//! instead of a linear-algebra panic.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * After `validate_inputs`, `validate_weights` and `validate_degree` succeed,
//!   a and l have the same non-zero length n, P materialises to n×n, and n ≥ m.
//!
//! ## Non-goals
//!
//! * This module does not check that P is symmetric or positive-definite.
//! * This module does not detect ill-conditioning; singularity is reported by the solver.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyFitError;
use crate::primitives::weights::WeightMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit inputs and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate the sample and observation vectors.
    pub fn validate_inputs<T: Float>(a: &[T], l: &[T]) -> Result<(), PolyFitError> {
        // Check 1: Non-empty arrays
        if a.is_empty() || l.is_empty() {
            return Err(PolyFitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if a.len() != l.len() {
            return Err(PolyFitError::MismatchedInputs {
                a_len: a.len(),
                l_len: l.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_finite(a, "a")?;
        Self::validate_finite(l, "l")?;

        Ok(())
    }

    /// Validate that every value in `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), PolyFitError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(PolyFitError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Model Validation
    // ========================================================================

    /// Validate the weight matrix against `n` observations.
    pub fn validate_weights<T: Float>(
        weights: &WeightMatrix<T>,
        n: usize,
    ) -> Result<(), PolyFitError> {
        weights.check_shape(n)?;
        Self::validate_finite(weights.entries(), "P")
    }

    /// Validate the parts of the weight layout that do not depend on `n`.
    ///
    /// A dense matrix must hold a perfect square number of entries; the
    /// reported expectation is the next larger square.
    pub fn validate_weight_layout<T: Float>(
        weights: &WeightMatrix<T>,
    ) -> Result<(), PolyFitError> {
        if let WeightMatrix::Full(p) = weights {
            let got = p.len();
            let mut side = 0usize;
            while (side + 1) * (side + 1) <= got {
                side += 1;
            }
            if side * side != got {
                return Err(PolyFitError::WeightShape {
                    got,
                    expected: (side + 1) * (side + 1),
                });
            }
        }
        Self::validate_finite(weights.entries(), "P")
    }

    /// Validate that `n` observations can determine a polynomial of `degree`.
    ///
    /// n == degree + 1 is accepted (exact interpolation, zero degrees of freedom).
    pub fn validate_degree(n: usize, degree: usize) -> Result<(), PolyFitError> {
        let parameters = degree.saturating_add(1);
        if n < parameters {
            return Err(PolyFitError::DegenerateDegree {
                observations: n,
                parameters,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Report a parameter that was configured more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PolyFitError> {
        if let Some(parameter) = duplicate_param {
            return Err(PolyFitError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

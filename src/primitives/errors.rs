//! Error types for weighted polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting a
//! polynomial by weighted least squares: input shape problems, non-finite
//! values, an under-determined degree, a singular normal matrix, and builder
//! misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending sizes (actual vs. expected).
//! * **Up-front**: Shape errors are raised before any arithmetic runs.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Empty inputs, mismatched lengths, wrongly sized weights.
//! 2. **Numeric validation**: NaN or infinite samples, observations, or weights.
//! 3. **Model validation**: More parameters than observations.
//! 4. **Linear algebra**: The normal matrix cannot be inverted.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for weighted polynomial fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyFitError {
    /// Sample or observation vector is empty.
    EmptyInput,

    /// Sample vector `a` and observation vector `l` differ in length.
    MismatchedInputs {
        /// Number of sample points.
        a_len: usize,
        /// Number of observations.
        l_len: usize,
    },

    /// Weight matrix does not have the number of entries the data requires.
    WeightShape {
        /// Number of entries supplied.
        got: usize,
        /// Number of entries required (n for diagonal weights, n*n for a full matrix).
        expected: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The polynomial has more coefficients than there are observations.
    DegenerateDegree {
        /// Number of observations (n).
        observations: usize,
        /// Number of polynomial coefficients (degree + 1).
        parameters: usize,
    },

    /// The normal matrix Aᵗ·P·A is not invertible.
    SingularMatrix {
        /// Dimension of the square normal matrix.
        size: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { a_len, l_len } => {
                write!(
                    f,
                    "Length mismatch: a has {a_len} points, l has {l_len} observations"
                )
            }
            Self::WeightShape { got, expected } => {
                write!(
                    f,
                    "Invalid weight matrix: got {got} entries, expected {expected}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DegenerateDegree {
                observations,
                parameters,
            } => {
                write!(
                    f,
                    "Degenerate degree: {parameters} coefficients cannot be estimated from {observations} observations"
                )
            }
            Self::SingularMatrix { size } => {
                write!(f, "Normal matrix ({size}x{size}) is singular")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyFitError {}

//! # wls-polyfit — Weighted least-squares polynomial fitting for Rust
//!
//! Fits a polynomial to noisy observations under an arbitrary observation
//! weight matrix by solving the normal equations, and reports the fitted
//! coefficients, their covariance, the a posteriori variance factor and the
//! residuals.
//!
//! ## The model
//!
//! Given samples `a`, observations `l`, an n×n weight matrix `P` and a degree,
//! the design matrix `A` has rows `[1, a_i, a_i², …, a_i^deg]` and
//!
//! ```text
//! N     = Aᵗ·P·A
//! x     = N⁻¹·Aᵗ·P·l          estimated coefficients (constant term first)
//! v     = A·x − l             residuals (fitted minus observed)
//! cov_x = N⁻¹                 coefficient covariance, unscaled
//! apv   = vᵗ·P·v / (n − m)    a posteriori variance factor, m = deg + 1
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use wls_polyfit::prelude::*;
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let l = [1.1, 2.0, 2.9, 4.1, 5.0];
//! let p = [
//!     1.0, 0.0, 0.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0, 0.0, 0.0,
//!     0.0, 0.0, 1.0, 0.0, 0.0,
//!     0.0, 0.0, 0.0, 1.0, 0.0,
//!     0.0, 0.0, 0.0, 0.0, 1.0,
//! ];
//!
//! let fit = fit_polynomial(&a, &l, &p, 2)?;
//! let (x, cov_x, apv, v) = fit.into_parts();
//!
//! assert_eq!(x.len(), 3);
//! assert_eq!(cov_x.len(), 9);
//! assert_eq!(v.len(), 5);
//! assert!(apv > 0.0);
//! # Result::<(), PolyFitError>::Ok(())
//! ```
//!
//! ## Builder
//!
//! For repeated fits, or for compact weight matrices, configure a model once:
//!
//! ```rust
//! use wls_polyfit::prelude::*;
//!
//! let model = PolyFit::new()
//!     .degree(1)                                     // Straight line
//!     .weights(Diagonal(vec![1.0, 1.0, 4.0, 1.0]))   // Third point is more precise
//!     .return_fitted()                               // Keep A·x in the result
//!     .build()?;
//!
//! let result = model.fit(&[0.0, 1.0, 2.0, 3.0], &[0.1, 0.9, 2.0, 3.1])?;
//! println!("{}", result);
//! # Result::<(), PolyFitError>::Ok(())
//! ```
//!
//! | Parameter                  | Default    | Description                                  |
//! |----------------------------|------------|----------------------------------------------|
//! | **degree**                 | 1          | Polynomial degree (m = degree + 1 unknowns)  |
//! | **weights**                | `Identity` | `Identity`, `Diagonal(w)` or `Full(P)`       |
//! | **return_fitted**          | false      | Include A·x in the result                    |
//! | **return_design_matrix**   | false      | Include A in the result                      |
//!
//! Each parameter may be set once; setting one twice makes `.build()` fail
//! with [`PolyFitError::DuplicateParameter`](prelude::PolyFitError).
//!
//! ## Covariance and the variance factor
//!
//! `covariance` is N⁻¹ exactly as produced by the normal equations. It is
//! **not** multiplied by the variance factor. Use `scaled_covariance()` or
//! `standard_errors()` for apv-scaled quantities.
//!
//! When n == m the polynomial interpolates the data, there are no degrees of
//! freedom left, and `variance_factor` is NaN. Fewer observations than
//! coefficients is rejected with `DegenerateDegree`.
//!
//! ## Numerical notes
//!
//! The normal matrix is inverted explicitly, which squares the condition
//! number of the design matrix. High degrees over wide sample ranges become
//! ill-conditioned quickly; a singular N is reported as `SingularMatrix`,
//! nothing is regularised.
//!
//! ## Logging
//!
//! The design matrix is emitted at `debug` level and the normal matrix at
//! `trace` level through the [`log`](https://docs.rs/log) facade. Install any
//! logger (e.g. `env_logger`) to see them.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! wls-polyfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types and weight matrices.
mod primitives;

// Layer 2: Math - design matrices and the nalgebra bridge.
mod math;

// Layer 3: Algorithms - the normal-equation estimator.
mod algorithms;

// Layer 4: Engine - validation and result assembly.
mod engine;

// High-level API: `fit_polynomial` and the `PolyFitBuilder`.
mod api;

// ============================================================================
// Public API
// ============================================================================

pub use api::{
    fit_polynomial, FloatLinalg, PolyFitBuilder, PolyFitError, PolyFitModel, PolyFitResult,
    WeightMatrix,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use wls_polyfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        fit_polynomial, PolyFitBuilder as PolyFit, PolyFitError, PolyFitModel, PolyFitResult,
        WeightMatrix,
        WeightMatrix::{Diagonal, Full, Identity},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

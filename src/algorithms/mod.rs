//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the weighted least-squares estimator: design matrix
//! construction, normal-equation inversion, residuals and the a posteriori
//! variance factor.

/// Normal-equation solver.
pub mod normal;

//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates fit inputs and assembles the public result type
//! from the raw solver output.

/// Result structure.
pub mod output;

/// Input validation.
pub mod validator;

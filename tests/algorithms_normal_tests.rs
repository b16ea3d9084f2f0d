#![cfg(feature = "dev")]
//! Tests for the normal-equation estimator.
//!
//! ## Test Organization
//!
//! 1. **Reference Fit** - Quadratic fit with exactly known solution
//! 2. **Edge Cases** - Interpolation, singular normal matrix
//! 3. **Variance Factor** - Weighted RSS and the zero-redundancy case
//! 4. **Diagnostics** - Design matrix emitted through `log`

use std::sync::{Mutex, Once};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use log::{Level, LevelFilter, Log, Metadata, Record};

use wls_polyfit::internals::algorithms::normal::{variance_factor, weighted_rss, NormalEquations};
use wls_polyfit::internals::primitives::errors::PolyFitError;
use wls_polyfit::internals::primitives::weights::WeightMatrix;

// ============================================================================
// Helper Functions
// ============================================================================

fn identity(n: usize) -> Vec<f64> {
    WeightMatrix::<f64>::Identity.to_dense(n).unwrap()
}

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

// ============================================================================
// Reference Fit
// ============================================================================

#[test]
fn test_quadratic_reference_solution() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let l = [1.1, 2.0, 2.9, 4.1, 5.0];
    let p = identity(5);

    let solution = NormalEquations::new(&a, &l, &p, 2).solve().unwrap();

    // Exact rational solution: x = [1/5, 603/700, 3/140]
    assert_relative_eq!(solution.coefficients[0], 1.0 / 5.0, epsilon = 1e-10);
    assert_relative_eq!(solution.coefficients[1], 603.0 / 700.0, epsilon = 1e-10);
    assert_relative_eq!(solution.coefficients[2], 3.0 / 140.0, epsilon = 1e-10);

    // N⁻¹
    #[rustfmt::skip]
    let expected_cov = [
        23.0 / 5.0,   -33.0 / 10.0,  1.0 / 2.0,
        -33.0 / 10.0, 187.0 / 70.0, -3.0 / 7.0,
        1.0 / 2.0,    -3.0 / 7.0,    1.0 / 14.0,
    ];
    for (c, e) in solution.covariance.iter().zip(expected_cov.iter()) {
        assert_relative_eq!(*c, *e, epsilon = 1e-9);
    }

    // apv = 9/875
    assert_relative_eq!(solution.variance_factor, 9.0 / 875.0, epsilon = 1e-12);
}

#[test]
fn test_residual_sign_is_fitted_minus_observed() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let l = [1.1, 2.0, 2.9, 4.1, 5.0];
    let p = identity(5);

    let solution = NormalEquations::new(&a, &l, &p, 2).solve().unwrap();

    // First residual: 1.1 fitted as 1.082857... -> v = -0.0171428...
    assert_relative_eq!(solution.residuals[0], -0.12 / 7.0, epsilon = 1e-10);
    for i in 0..5 {
        assert_relative_eq!(
            solution.residuals[i],
            solution.fitted[i] - l[i],
            epsilon = 1e-15
        );
    }
}

#[test]
fn test_solution_shapes() {
    let a = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
    let l = [1.0, 1.2, 0.8, 1.1, 0.9, 1.0];
    let p = identity(6);

    let solution = NormalEquations::new(&a, &l, &p, 3).solve().unwrap();
    assert_eq!(solution.design.len(), 6 * 4);
    assert_eq!(solution.coefficients.len(), 4);
    assert_eq!(solution.covariance.len(), 16);
    assert_eq!(solution.fitted.len(), 6);
    assert_eq!(solution.residuals.len(), 6);
}

#[test]
fn test_constant_fit_is_weighted_mean() {
    let a = [0.0, 1.0, 2.0];
    let l = [1.0, 2.0, 6.0];
    let p = WeightMatrix::Diagonal(vec![1.0, 1.0, 2.0]).to_dense(3).unwrap();

    let solution = NormalEquations::new(&a, &l, &p, 0).solve().unwrap();

    // (1 + 2 + 12) / 4
    assert_relative_eq!(solution.coefficients[0], 3.75, epsilon = 1e-12);
    assert_relative_eq!(solution.covariance[0], 0.25, epsilon = 1e-12);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_exact_interpolation() {
    // l = 1 + 2t - t^2 + 0.5t^3
    let a = [0.0, 1.0, 2.0, 3.0];
    let l = [1.0, 2.5, 5.0, 11.5];
    let p = identity(4);

    let solution = NormalEquations::new(&a, &l, &p, 3).solve().unwrap();

    let expected = [1.0, 2.0, -1.0, 0.5];
    for (c, e) in solution.coefficients.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*c, *e, epsilon = 1e-8);
    }
    for v in &solution.residuals {
        assert_abs_diff_eq!(*v, 0.0, epsilon = 1e-8);
    }
    assert!(solution.variance_factor.is_nan());
}

#[test]
fn test_singular_normal_matrix() {
    // All samples at the same abscissa: columns of A are collinear.
    let a = [2.0, 2.0, 2.0, 2.0, 2.0];
    let l = [1.0, 1.1, 0.9, 1.0, 1.2];
    let p = identity(5);

    let err = NormalEquations::new(&a, &l, &p, 1).solve().unwrap_err();
    assert_eq!(err, PolyFitError::SingularMatrix { size: 2 });
}

#[test]
fn test_zero_weights_are_singular() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let l = [1.0, 2.0, 3.0, 4.0];
    let p = vec![0.0; 16];

    let err = NormalEquations::new(&a, &l, &p, 2).solve().unwrap_err();
    assert_eq!(err, PolyFitError::SingularMatrix { size: 3 });
}

// ============================================================================
// Variance Factor
// ============================================================================

#[test]
fn test_weighted_rss_identity() {
    let v = [1.0, -2.0, 3.0];
    assert_relative_eq!(weighted_rss(&v, &identity(3)), 14.0);
}

#[test]
fn test_weighted_rss_full_matrix() {
    let v = [1.0, 2.0];
    let p = [2.0, 1.0, 1.0, 3.0];
    // [1 2] [[2 1][1 3]] [1 2]^T = 2 + 2 + 2 + 12
    assert_relative_eq!(weighted_rss(&v, &p), 18.0);
}

#[test]
fn test_variance_factor_divides_by_redundancy() {
    let v = [1.0, -2.0, 3.0];
    assert_relative_eq!(variance_factor(&v, &identity(3), 2), 7.0);
}

#[test]
fn test_variance_factor_zero_redundancy_is_nan() {
    let v = [0.0, 0.0];
    assert!(variance_factor(&v, &identity(2), 0).is_nan());

    let v = [1e-3, -1e-3];
    assert!(variance_factor(&v, &identity(2), 0).is_nan());
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_design_matrix_is_logged() {
    install_logger();

    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let l = [1.1, 2.0, 2.9, 4.1, 5.0];
    let p = identity(5);
    NormalEquations::new(&a, &l, &p, 2).solve().unwrap();

    let records = RECORDS.lock().unwrap();
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Debug && msg.starts_with("design matrix A (5x3)")));
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Trace && msg.starts_with("normal matrix N (3x3)")));
}

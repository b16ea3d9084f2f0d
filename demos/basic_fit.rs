//! Quadratic fit of five noisy observations with equal weights.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_fit` to see the
//! design matrix.

use wls_polyfit::prelude::*;

fn main() -> Result<(), PolyFitError> {
    env_logger::init();

    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let l = vec![1.1, 2.0, 2.9, 4.1, 5.0];

    let model = PolyFit::new()
        .degree(2)
        .weights(Identity)
        .return_fitted()
        .build()?;

    let result = model.fit(&a, &l)?;
    println!("{}", result);

    let scaled = result.scaled_covariance();
    println!("Scaled covariance (apv * N^-1):");
    for row in scaled.chunks(result.n_parameters) {
        println!("  {:?}", row);
    }

    Ok(())
}

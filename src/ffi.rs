// src/ffi.rs
//
// All functions exposed to the Python host live here.
// This is the single source of truth for the host surface - core logic
// stays in factorial.rs and must not depend on pyo3.

use std::sync::Once;

use num_bigint::BigUint;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::factorial::{FactorialError, try_factorial};

// ================================================================================================
// INITIALIZATION
// ================================================================================================

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // try_init: the host process may already carry a subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// ================================================================================================
// ERROR MAPPING
// ================================================================================================

impl From<FactorialError> for PyErr {
    fn from(err: FactorialError) -> PyErr {
        match err {
            FactorialError::NegativeInput(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

// ================================================================================================
// MODULE SURFACE
// ================================================================================================

/// Calculates the factorial of an integer.
///
/// Raises `ValueError` for negative input. The result is exact for any
/// non-negative `n`; values past the `u64` range are returned as ordinary
/// Python integers.
#[pyfunction]
fn factorial(n: i64) -> PyResult<BigUint> {
    Ok(try_factorial(n)?)
}

#[pymodule]
fn fastfactorial(m: &Bound<'_, PyModule>) -> PyResult<()> {
    init_tracing();
    tracing::debug!("fastfactorial module initializing");
    m.add_function(wrap_pyfunction!(factorial, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

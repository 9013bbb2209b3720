// factorial.rs - pure computation core, no host types allowed here

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactorialError {
    #[error("factorial is undefined for negative input: {0}")]
    NegativeInput(i64),
}

/// Validating entry point: rejects negative `n`, then computes `n!`.
pub fn try_factorial(n: i64) -> Result<BigUint, FactorialError> {
    if n < 0 {
        return Err(FactorialError::NegativeInput(n));
    }
    Ok(factorial(n as u64))
}

/// Computes `n!` as the iterative product `1 × 2 × … × n`, with `0! = 1`.
///
/// Overflow policy: promotion. The product accumulates in a `u64` while it
/// fits (everything up to `20!`) and switches to `BigUint` for the rest, so
/// the result is always the exact mathematical value. There is no upper
/// bound on `n` beyond memory and time.
pub fn factorial(n: u64) -> BigUint {
    let mut acc = 1u64;
    let mut i = 2u64;
    while i <= n {
        match acc.checked_mul(i) {
            Some(next) => acc = next,
            None => break,
        }
        i += 1;
    }
    // i still holds the first factor that didn't fit
    let mut result = BigUint::from(acc);
    while i <= n {
        result *= i;
        i += 1;
    }
    result
}

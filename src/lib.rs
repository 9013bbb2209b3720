//! Native factorial extension module for Python hosts.
//!
//! The crate builds two ways: as a plain Rust library (default features,
//! no Python toolchain needed) and as a CPython extension module named
//! `fastfactorial` when the `python` feature is enabled, which maturin
//! does when building the wheel.

pub mod factorial;

#[cfg(feature = "python")]
mod ffi;

pub use factorial::{FactorialError, factorial, try_factorial};

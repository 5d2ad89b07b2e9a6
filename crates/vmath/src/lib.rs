//! Arrays of small math value types.
//!
//! This crate builds on [`vmath_linalg`] (re-exported as [`linalg`]) and adds containers for its
//! vectors, matrices, quaternions, colors and boxes:
//!
//! * [`FixedArray`]: fixed-length arrays with element-wise arithmetic, reference-semantics mask
//!   views and copy-semantics slices, plus typed operations for each element kind.
//! * [`Array2D`]: two-dimensional grids with element-wise arithmetic.
//! * [`VArray`]: jagged arrays whose elements are independently sized runs of values.
//! * [`procrustes_rotation_and_translation`]: least-squares rigid fitting of point sets.
//!
//! # Errors
//!
//! Fallible operations return [`ArrayError`], whose [`ArrayError::kind`] classifies failures
//! the same way [`linalg::Error::kind`] does for value types.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade. Binaries and tests can call [`init_logger!`] to
//! install an `env_logger` backend.

pub mod array;
pub mod array2d;
pub mod error;
pub mod procrustes;
pub mod varray;

use log::LevelFilter;

pub use vmath_linalg as linalg;

pub use array::{FixedArray, Operand, Slice};
pub use array2d::Array2D;
pub use error::{ArrayError, ErrorKind};
pub use procrustes::{procrustes_rotation_and_translation, procrustes_rotation_and_translation_arrays};
pub use varray::VArray;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("vmath_linalg"), LevelFilter::Warn)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `vmath` will log at *trace*
/// level. Otherwise, they will log at *debug* level.
///
/// `vmath_linalg` will log at *warn* level unless overridden through `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

//! Small, fixed-size linear algebra and geometry types.
//!
//! This crate provides the value types of the `vmath` workspace: vectors, matrices, quaternions,
//! Euler angles, shears, colors, axis-aligned boxes, lines, planes and view frusta. The array
//! types in `vmath` store these values in bulk and apply their operations elementwise.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Vector and matrix dimensions are const
//!   generics, which keeps the API small.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors. Matrices
//!   are indexed as `m[(row, col)]` and multiply row vectors from the right (`v * M`), so a
//!   transform chain reads left to right.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Operations that can fail on degenerate input come in two forms: a `try_*` method returning
//!   [`Result`], and a plain method that returns a documented fallback value instead.
//! - Every value type formats with [`Debug`] into a representation that parses back with
//!   [`FromStr`].
//!
//! [`Debug`]: std::fmt::Debug
//! [`FromStr`]: std::str::FromStr

pub mod approx;
mod bounds;
mod color;
mod error;
mod euler;
mod frustum;
mod line;
mod matrix;
pub mod num;
mod plane;
mod quat;
mod rand;
mod repr;
mod shear;
mod traits;
mod vector;

pub use bounds::*;
pub use color::*;
pub use error::*;
pub use euler::*;
pub use frustum::*;
pub use line::*;
pub use matrix::*;
pub use plane::*;
pub use quat::*;
pub use rand::*;
pub use shear::*;
pub use traits::*;
pub use vector::*;

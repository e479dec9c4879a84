//! Core types for the lattice tensor-computation framework.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`Context`] - Backend preference descriptor for operator creation
//! - [`NdArray`] - Dense row-major N-dimensional array storage
//!
//! # Quick Example
//!
//! ```
//! use lattice_core::{Context, NdArray};
//!
//! // Prefer the parallel CPU backend, fall back to the serial one
//! let ctx = Context::new()
//!     .with_backend("cpu-parallel")
//!     .with_backend("cpu");
//!
//! let input = NdArray::from_vec(vec![0.0, 1.0, -1.0]);
//! assert_eq!(input.shape(), &[3]);
//! ```
//!
//! Operator registries and backend implementations live in `lattice-op`
//! and `lattice-backend`.

mod array;
mod context;

pub use array::{ArrayError, NdArray};
pub use context::Context;

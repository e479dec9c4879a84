//! Operator registry and backend dispatch for lattice.
//!
//! Numerical operators are implemented once per backend and selected at run
//! time by a [`Context`](lattice_core::Context) carrying an ordered backend
//! preference list. This crate provides the machinery that makes that work:
//!
//! - [`Operator`] - Abstract interface every backend implementation fills in
//! - [`CreatorFn`] / [`RegistryItem`] - Type-erased constructor for one
//!   (operator, backend) pair
//! - [`OperatorDb`] - Ordered creator store with first-match lookup
//! - [`OperatorRegistry`] - Typed facade exposing `create` / `add`
//! - [`RegistryTable`] - One registry per operator, built explicitly at
//!   startup
//! - [`transform`] - The elementwise transform catalog backends implement
//!
//! # Example
//!
//! ```
//! use lattice_core::{Context, NdArray};
//! use lattice_op::{OperatorRegistry, RegistryItem};
//! # struct SquareOp { ctx: Context }
//! # impl lattice_op::Operator for SquareOp {
//! #     fn name(&self) -> &'static str { "square" }
//! #     fn backend(&self) -> &str { "cpu" }
//! #     fn context(&self) -> &Context { &self.ctx }
//! #     fn apply(&self, input: &NdArray) -> NdArray { input.map(|x| x * x) }
//! # }
//!
//! let mut registry = OperatorRegistry::<()>::new("square");
//! registry.add(RegistryItem::new("cpu", |ctx, _args| {
//!     Box::new(SquareOp { ctx: ctx.clone() })
//! }));
//!
//! let ctx = Context::new().with_backend("cpu");
//! let op = registry.create(&ctx, &()).unwrap();
//! let out = op.apply(&NdArray::from_vec(vec![3.0]));
//! assert_eq!(out.data(), &[9.0]);
//! ```
//!
//! Backend implementations and startup registration live in
//! `lattice-backend`; this crate knows nothing about concrete backends.

mod error;
mod operator;
mod registry;
mod table;
pub mod transform;

pub use error::RegistryError;
pub use operator::{BoxedOperator, Operator};
pub use registry::{CreatorFn, OperatorDb, OperatorRegistry, RegistryItem};
pub use table::RegistryTable;
pub use transform::ScalarArg;

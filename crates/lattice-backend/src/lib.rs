//! Backend implementations and startup registration for lattice operators.
//!
//! This crate supplies the concrete operator implementations behind the
//! registries in `lattice-op`:
//!
//! - [`CpuUnary`] - Serial CPU loop over a transform (backend `"cpu"`)
//! - [`ParallelUnary`] - Rayon-parallel loop (backend `"cpu-parallel"`)
//! - [`register_cpu`] / [`register_parallel`] - Startup registration entry
//!   points, one `add` per (operator, backend) pair
//! - [`registry`] - The process-wide registry table, initialized on first
//!   use with both built-in backends registered
//! - `create_*` - Convenience constructors over the process-wide table
//!
//! # Quick Example
//!
//! ```
//! use lattice_backend::create_acos;
//! use lattice_core::{Context, NdArray};
//!
//! let ctx = Context::new().with_backend("cpu");
//! let acos = create_acos(&ctx).unwrap();
//!
//! let out = acos.apply(&NdArray::from_vec(vec![1.0]));
//! assert!(out.data()[0].abs() < 1e-12);
//! ```
//!
//! # Embedded / test use
//!
//! Code that wants deterministic, isolated registration builds its own
//! table instead of touching the process-wide one:
//!
//! ```
//! use lattice_backend::{register_cpu, register_parallel};
//! use lattice_op::RegistryTable;
//!
//! let mut table = RegistryTable::new();
//! register_cpu(&mut table);
//! register_parallel(&mut table);
//! ```

mod cpu;
mod global;
mod parallel;
mod register;

pub use cpu::{CPU, CpuUnary};
pub use global::{
    create_abs, create_acos, create_add_scalar, create_asin, create_atan, create_ceil,
    create_cos, create_cosh, create_exp, create_floor, create_log, create_maximum_scalar,
    create_minimum_scalar, create_mul_scalar, create_pow_scalar, create_r_div_scalar,
    create_r_pow_scalar, create_r_sub_scalar, create_round, create_sin, create_sinh,
    create_sqrt, create_square, create_tan, create_tanh, registry,
};
pub use parallel::{CPU_PARALLEL, ParallelUnary};
pub use register::{register_cpu, register_parallel, with_builtins};

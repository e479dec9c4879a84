//! The process-wide registry table.
//!
//! Most hosts want one table for the life of the process, initialized before
//! any operator creation. [`registry`] provides that: the first call builds
//! the table and runs both built-in registration entry points inside the
//! `OnceLock` initializer, so no thread can observe a partially registered
//! table. After initialization the table is only handed out by shared
//! reference — lookups are plain reads, safe from any number of threads.

use std::sync::OnceLock;

use lattice_core::Context;
use lattice_op::{BoxedOperator, RegistryError, RegistryTable};

use crate::register::with_builtins;

static REGISTRY: OnceLock<RegistryTable> = OnceLock::new();

/// Returns the process-wide registry table, with both built-in backends
/// registered.
pub fn registry() -> &'static RegistryTable {
    REGISTRY.get_or_init(with_builtins)
}

/// Creates an `abs` operator from the process-wide table.
pub fn create_abs(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_abs(ctx)
}

/// Creates an `acos` operator from the process-wide table.
pub fn create_acos(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_acos(ctx)
}

/// Creates an `asin` operator from the process-wide table.
pub fn create_asin(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_asin(ctx)
}

/// Creates an `atan` operator from the process-wide table.
pub fn create_atan(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_atan(ctx)
}

/// Creates a `ceil` operator from the process-wide table.
pub fn create_ceil(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_ceil(ctx)
}

/// Creates a `cos` operator from the process-wide table.
pub fn create_cos(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_cos(ctx)
}

/// Creates a `cosh` operator from the process-wide table.
pub fn create_cosh(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_cosh(ctx)
}

/// Creates an `exp` operator from the process-wide table.
pub fn create_exp(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_exp(ctx)
}

/// Creates a `floor` operator from the process-wide table.
pub fn create_floor(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_floor(ctx)
}

/// Creates a `log` operator from the process-wide table.
pub fn create_log(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_log(ctx)
}

/// Creates a `round` operator from the process-wide table.
pub fn create_round(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_round(ctx)
}

/// Creates a `sin` operator from the process-wide table.
pub fn create_sin(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_sin(ctx)
}

/// Creates a `sinh` operator from the process-wide table.
pub fn create_sinh(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_sinh(ctx)
}

/// Creates a `sqrt` operator from the process-wide table.
pub fn create_sqrt(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_sqrt(ctx)
}

/// Creates a `square` operator from the process-wide table.
pub fn create_square(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_square(ctx)
}

/// Creates a `tan` operator from the process-wide table.
pub fn create_tan(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_tan(ctx)
}

/// Creates a `tanh` operator from the process-wide table.
pub fn create_tanh(ctx: &Context) -> Result<BoxedOperator, RegistryError> {
    registry().create_tanh(ctx)
}

/// Creates an `add_scalar` operator with addend `val`.
pub fn create_add_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_add_scalar(ctx, val)
}

/// Creates a `mul_scalar` operator with factor `val`.
pub fn create_mul_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_mul_scalar(ctx, val)
}

/// Creates a `pow_scalar` operator with exponent `val`.
pub fn create_pow_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_pow_scalar(ctx, val)
}

/// Creates an `r_pow_scalar` operator with base `val`.
pub fn create_r_pow_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_r_pow_scalar(ctx, val)
}

/// Creates an `r_sub_scalar` operator with minuend `val`.
pub fn create_r_sub_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_r_sub_scalar(ctx, val)
}

/// Creates an `r_div_scalar` operator with dividend `val`.
pub fn create_r_div_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_r_div_scalar(ctx, val)
}

/// Creates a `maximum_scalar` operator with lower clamp `val`.
pub fn create_maximum_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_maximum_scalar(ctx, val)
}

/// Creates a `minimum_scalar` operator with upper clamp `val`.
pub fn create_minimum_scalar(ctx: &Context, val: f64) -> Result<BoxedOperator, RegistryError> {
    registry().create_minimum_scalar(ctx, val)
}

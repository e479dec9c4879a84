//! Startup registration of the built-in backends.
//!
//! Each entry point performs one `add` per (operator, backend) pair and is
//! meant to run exactly once per table, during single-threaded
//! initialization, before any create traffic. Re-running an entry point
//! appends duplicate items; lookup still resolves to the first-inserted
//! ones, so the duplicates are dead weight rather than a correctness
//! problem.

use lattice_core::Context;
use lattice_op::transform::{
    Abs, Acos, AddScalar, Asin, Atan, Ceil, Cos, Cosh, Exp, Floor, Log, MaximumScalar,
    MinimumScalar, MulScalar, PowScalar, RDivScalar, RPowScalar, RSubScalar, Round, ScalarArg,
    Sin, Sinh, Sqrt, Square, Tan, Tanh, UnaryTransform,
};
use lattice_op::{RegistryItem, RegistryTable};
use tracing::debug;

use crate::cpu::{CPU, CpuUnary};
use crate::parallel::{CPU_PARALLEL, ParallelUnary};

fn cpu_unary<T>(transform: T) -> RegistryItem<()>
where
    T: UnaryTransform + Copy,
{
    RegistryItem::new(CPU, move |ctx: &Context, _args: &()| {
        CpuUnary::boxed(ctx, transform)
    })
}

fn cpu_scalar<T, F>(make: F) -> RegistryItem<ScalarArg>
where
    T: UnaryTransform,
    F: Fn(f64) -> T + Send + Sync + 'static,
{
    RegistryItem::new(CPU, move |ctx: &Context, args: &ScalarArg| {
        CpuUnary::boxed(ctx, make(args.val))
    })
}

fn parallel_unary<T>(transform: T) -> RegistryItem<()>
where
    T: UnaryTransform + Copy,
{
    RegistryItem::new(CPU_PARALLEL, move |ctx: &Context, _args: &()| {
        ParallelUnary::boxed(ctx, transform)
    })
}

fn parallel_scalar<T, F>(make: F) -> RegistryItem<ScalarArg>
where
    T: UnaryTransform,
    F: Fn(f64) -> T + Send + Sync + 'static,
{
    RegistryItem::new(CPU_PARALLEL, move |ctx: &Context, args: &ScalarArg| {
        ParallelUnary::boxed(ctx, make(args.val))
    })
}

/// Registers every catalog operator under the serial CPU backend.
pub fn register_cpu(table: &mut RegistryTable) {
    table.abs.add(cpu_unary(Abs));
    table.acos.add(cpu_unary(Acos));
    table.asin.add(cpu_unary(Asin));
    table.atan.add(cpu_unary(Atan));
    table.ceil.add(cpu_unary(Ceil));
    table.cos.add(cpu_unary(Cos));
    table.cosh.add(cpu_unary(Cosh));
    table.exp.add(cpu_unary(Exp));
    table.floor.add(cpu_unary(Floor));
    table.log.add(cpu_unary(Log));
    table.round.add(cpu_unary(Round));
    table.sin.add(cpu_unary(Sin));
    table.sinh.add(cpu_unary(Sinh));
    table.sqrt.add(cpu_unary(Sqrt));
    table.square.add(cpu_unary(Square));
    table.tan.add(cpu_unary(Tan));
    table.tanh.add(cpu_unary(Tanh));

    table.add_scalar.add(cpu_scalar(AddScalar::new));
    table.mul_scalar.add(cpu_scalar(MulScalar::new));
    table.pow_scalar.add(cpu_scalar(PowScalar::new));
    table.r_pow_scalar.add(cpu_scalar(RPowScalar::new));
    table.r_sub_scalar.add(cpu_scalar(RSubScalar::new));
    table.r_div_scalar.add(cpu_scalar(RDivScalar::new));
    table.maximum_scalar.add(cpu_scalar(MaximumScalar::new));
    table.minimum_scalar.add(cpu_scalar(MinimumScalar::new));

    debug!(backend = CPU, "registered built-in operators");
}

/// Registers every catalog operator under the rayon-parallel CPU backend.
pub fn register_parallel(table: &mut RegistryTable) {
    table.abs.add(parallel_unary(Abs));
    table.acos.add(parallel_unary(Acos));
    table.asin.add(parallel_unary(Asin));
    table.atan.add(parallel_unary(Atan));
    table.ceil.add(parallel_unary(Ceil));
    table.cos.add(parallel_unary(Cos));
    table.cosh.add(parallel_unary(Cosh));
    table.exp.add(parallel_unary(Exp));
    table.floor.add(parallel_unary(Floor));
    table.log.add(parallel_unary(Log));
    table.round.add(parallel_unary(Round));
    table.sin.add(parallel_unary(Sin));
    table.sinh.add(parallel_unary(Sinh));
    table.sqrt.add(parallel_unary(Sqrt));
    table.square.add(parallel_unary(Square));
    table.tan.add(parallel_unary(Tan));
    table.tanh.add(parallel_unary(Tanh));

    table.add_scalar.add(parallel_scalar(AddScalar::new));
    table.mul_scalar.add(parallel_scalar(MulScalar::new));
    table.pow_scalar.add(parallel_scalar(PowScalar::new));
    table.r_pow_scalar.add(parallel_scalar(RPowScalar::new));
    table.r_sub_scalar.add(parallel_scalar(RSubScalar::new));
    table.r_div_scalar.add(parallel_scalar(RDivScalar::new));
    table.maximum_scalar.add(parallel_scalar(MaximumScalar::new));
    table.minimum_scalar.add(parallel_scalar(MinimumScalar::new));

    debug!(backend = CPU_PARALLEL, "registered built-in operators");
}

/// Builds a fresh table with both built-in backends registered.
///
/// Serial CPU registers first, so a context that lists several built-in
/// backends still gets exactly the one it asked for first — caller
/// preference, not registration order, decides.
pub fn with_builtins() -> RegistryTable {
    let mut table = RegistryTable::new();
    register_cpu(&mut table);
    register_parallel(&mut table);
    table
}

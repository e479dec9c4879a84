//! Rayon-parallel CPU operator implementations.

use lattice_core::{Context, NdArray};
use lattice_op::transform::UnaryTransform;
use lattice_op::{BoxedOperator, Operator};
use rayon::prelude::*;

/// Identifier of the rayon-parallel CPU backend.
pub const CPU_PARALLEL: &str = "cpu-parallel";

/// Parallel CPU implementation of a unary transform.
///
/// Splits the element loop across the rayon thread pool. Worth requesting
/// for large arrays; for small ones the serial backend avoids the fork/join
/// overhead, which is why callers list their preference in the context
/// rather than this crate picking for them.
pub struct ParallelUnary<T: UnaryTransform> {
    ctx: Context,
    transform: T,
}

impl<T: UnaryTransform> ParallelUnary<T> {
    /// Creates the operator for the given context.
    pub fn new(ctx: &Context, transform: T) -> Self {
        Self {
            ctx: ctx.clone(),
            transform,
        }
    }

    /// Boxed constructor, shaped for registration closures.
    pub fn boxed(ctx: &Context, transform: T) -> BoxedOperator {
        Box::new(Self::new(ctx, transform))
    }
}

impl<T: UnaryTransform> Operator for ParallelUnary<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn backend(&self) -> &str {
        CPU_PARALLEL
    }

    fn context(&self) -> &Context {
        &self.ctx
    }

    fn apply(&self, input: &NdArray) -> NdArray {
        let mut out = input.clone();
        out.data_mut()
            .par_iter_mut()
            .for_each(|x| *x = self.transform.eval(*x));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::CpuUnary;
    use lattice_op::transform::{Exp, Sqrt};

    #[test]
    fn test_parallel_matches_serial() {
        let ctx = Context::default();
        let input = NdArray::from_vec((0..4096).map(f64::from).collect());

        let serial = CpuUnary::new(&ctx, Sqrt).apply(&input);
        let parallel = ParallelUnary::new(&ctx, Sqrt).apply(&input);
        assert_eq!(serial.data(), parallel.data());
    }

    #[test]
    fn test_parallel_preserves_shape() {
        let op = ParallelUnary::new(&Context::default(), Exp);
        let input = NdArray::zeros(vec![8, 8, 3]);
        let out = op.apply(&input);
        assert_eq!(out.shape(), &[8, 8, 3]);
        assert!(out.data().iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_parallel_reports_identity() {
        let op = ParallelUnary::new(&Context::default(), Sqrt);
        assert_eq!(op.name(), "sqrt");
        assert_eq!(op.backend(), "cpu-parallel");
    }
}

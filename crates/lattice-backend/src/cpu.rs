//! Serial CPU operator implementations.

use lattice_core::{Context, NdArray};
use lattice_op::transform::UnaryTransform;
use lattice_op::{BoxedOperator, Operator};

/// Identifier of the serial CPU backend.
pub const CPU: &str = "cpu";

/// Serial CPU implementation of a unary transform.
///
/// The baseline backend: always registered, no threading, one pass over the
/// input. Generic over the transform so every catalog entry shares this one
/// loop.
pub struct CpuUnary<T: UnaryTransform> {
    ctx: Context,
    transform: T,
}

impl<T: UnaryTransform> CpuUnary<T> {
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

impl<T: UnaryTransform> Operator for CpuUnary<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn backend(&self) -> &str {
        CPU
    }

    fn context(&self) -> &Context {
        &self.ctx
    }

    fn apply(&self, input: &NdArray) -> NdArray {
        input.map(|x| self.transform.eval(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_op::transform::{Acos, RPowScalar, Square};
    use std::f64::consts::PI;

    #[test]
    fn test_cpu_acos_values() {
        let op = CpuUnary::new(&Context::default(), Acos);
        let out = op.apply(&NdArray::from_vec(vec![0.0, 1.0, -1.0]));
        let expected = [PI / 2.0, 0.0, PI];
        for (got, want) in out.data().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_cpu_preserves_shape() {
        let op = CpuUnary::new(&Context::default(), Square);
        let input = NdArray::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let out = op.apply(&input);
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.data(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
    }

    #[test]
    fn test_cpu_scalar_transform() {
        let op = CpuUnary::new(&Context::default(), RPowScalar::new(2.0));
        let out = op.apply(&NdArray::from_vec(vec![0.0, 1.0, 3.0]));
        assert_eq!(out.data(), &[1.0, 2.0, 8.0]);
    }

    #[test]
    fn test_cpu_reports_identity() {
        let op = CpuUnary::new(&Context::default(), Acos);
        assert_eq!(op.name(), "acos");
        assert_eq!(op.backend(), "cpu");
        assert_eq!(op.context().backends(), &["cpu".to_string()]);
    }
}

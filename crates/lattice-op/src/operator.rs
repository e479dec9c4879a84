//! The operator base interface.

use lattice_core::{Context, NdArray};

/// An elementwise numeric operator, implemented per backend.
///
/// Concrete implementations are constructed through an
/// [`OperatorRegistry`](crate::OperatorRegistry) and handed back behind this
/// trait. The registry keeps no reference to the instance; its lifetime is
/// entirely the caller's.
pub trait Operator: Send + Sync {
    /// Operator name, e.g. `"acos"`.
    fn name(&self) -> &'static str;

    /// Identifier of the backend this instance runs on.
    fn backend(&self) -> &str;

    /// The context this instance was created with.
    fn context(&self) -> &Context;

    /// Applies the operator elementwise.
    ///
    /// The output has the same shape as the input; each output element is a
    /// deterministic, side-effect-free function of the corresponding input
    /// element and the operator's scalar parameters.
    fn apply(&self, input: &NdArray) -> NdArray;
}

/// An owned operator instance as returned by registry creation.
pub type BoxedOperator = Box<dyn Operator>;

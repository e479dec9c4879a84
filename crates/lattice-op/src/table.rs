//! The per-operator registry table.

use lattice_core::Context;

use crate::error::RegistryError;
use crate::operator::BoxedOperator;
use crate::registry::OperatorRegistry;
use crate::transform::ScalarArg;

/// One registry per operator, held in a single explicit table.
///
/// The table is a plain value: embedders and tests construct a fresh table
/// and call the backend registration entry points on it explicitly, which
/// keeps initialization order deterministic and keeps tests off global
/// state. `lattice-backend` owns the process-wide instance for the common
/// startup-then-steady-state lifecycle.
///
/// Every field is its own [`OperatorRegistry`], so two operators can never
/// share creators, and the argument bundle of each registry is fixed by its
/// type.
///
/// # Example
///
/// ```
/// use lattice_core::{Context, NdArray};
/// use lattice_op::{RegistryItem, RegistryTable};
/// # struct Identity { ctx: Context }
/// # impl lattice_op::Operator for Identity {
/// #     fn name(&self) -> &'static str { "square" }
/// #     fn backend(&self) -> &str { "cpu" }
/// #     fn context(&self) -> &Context { &self.ctx }
/// #     fn apply(&self, input: &NdArray) -> NdArray { input.clone() }
/// # }
///
/// let mut table = RegistryTable::new();
/// table.square.add(RegistryItem::new("cpu", |ctx, _args| {
///     Box::new(Identity { ctx: ctx.clone() })
/// }));
///
/// let op = table.create_square(&Context::default()).unwrap();
/// assert_eq!(op.backend(), "cpu");
/// ```
pub struct RegistryTable {
    /// `y = |x|`
    pub abs: OperatorRegistry<()>,
    /// `y = acos(x)`
    pub acos: OperatorRegistry<()>,
    /// `y = asin(x)`
    pub asin: OperatorRegistry<()>,
    /// `y = atan(x)`
    pub atan: OperatorRegistry<()>,
    /// `y = ceil(x)`
    pub ceil: OperatorRegistry<()>,
    /// `y = cos(x)`
    pub cos: OperatorRegistry<()>,
    /// `y = cosh(x)`
    pub cosh: OperatorRegistry<()>,
    /// `y = exp(x)`
    pub exp: OperatorRegistry<()>,
    /// `y = floor(x)`
    pub floor: OperatorRegistry<()>,
    /// `y = ln(x)`
    pub log: OperatorRegistry<()>,
    /// `y = round(x)`
    pub round: OperatorRegistry<()>,
    /// `y = sin(x)`
    pub sin: OperatorRegistry<()>,
    /// `y = sinh(x)`
    pub sinh: OperatorRegistry<()>,
    /// `y = sqrt(x)`
    pub sqrt: OperatorRegistry<()>,
    /// `y = x²`
    pub square: OperatorRegistry<()>,
    /// `y = tan(x)`
    pub tan: OperatorRegistry<()>,
    /// `y = tanh(x)`
    pub tanh: OperatorRegistry<()>,
    /// `y = x + v`
    pub add_scalar: OperatorRegistry<ScalarArg>,
    /// `y = x * v`
    pub mul_scalar: OperatorRegistry<ScalarArg>,
    /// `y = x ^ v`
    pub pow_scalar: OperatorRegistry<ScalarArg>,
    /// `y = v ^ x`
    pub r_pow_scalar: OperatorRegistry<ScalarArg>,
    /// `y = v - x`
    pub r_sub_scalar: OperatorRegistry<ScalarArg>,
    /// `y = v / x`
    pub r_div_scalar: OperatorRegistry<ScalarArg>,
    /// `y = max(x, v)`
    pub maximum_scalar: OperatorRegistry<ScalarArg>,
    /// `y = min(x, v)`
    pub minimum_scalar: OperatorRegistry<ScalarArg>,
}

impl RegistryTable {
    /// Creates a table with every registry empty.
    pub fn new() -> Self {
        Self {
            abs: OperatorRegistry::new("abs"),
            acos: OperatorRegistry::new("acos"),
            asin: OperatorRegistry::new("asin"),
            atan: OperatorRegistry::new("atan"),
            ceil: OperatorRegistry::new("ceil"),
            cos: OperatorRegistry::new("cos"),
            cosh: OperatorRegistry::new("cosh"),
            exp: OperatorRegistry::new("exp"),
            floor: OperatorRegistry::new("floor"),
            log: OperatorRegistry::new("log"),
            round: OperatorRegistry::new("round"),
            sin: OperatorRegistry::new("sin"),
            sinh: OperatorRegistry::new("sinh"),
            sqrt: OperatorRegistry::new("sqrt"),
            square: OperatorRegistry::new("square"),
            tan: OperatorRegistry::new("tan"),
            tanh: OperatorRegistry::new("tanh"),
            add_scalar: OperatorRegistry::new("add_scalar"),
            mul_scalar: OperatorRegistry::new("mul_scalar"),
            pow_scalar: OperatorRegistry::new("pow_scalar"),
            r_pow_scalar: OperatorRegistry::new("r_pow_scalar"),
            r_sub_scalar: OperatorRegistry::new("r_sub_scalar"),
            r_div_scalar: OperatorRegistry::new("r_div_scalar"),
            maximum_scalar: OperatorRegistry::new("maximum_scalar"),
            minimum_scalar: OperatorRegistry::new("minimum_scalar"),
        }
    }

    /// Creates an `abs` operator for the context's preferred backend.
    pub fn create_abs(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.abs.create(ctx, &())
    }

    /// Creates an `acos` operator for the context's preferred backend.
    pub fn create_acos(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.acos.create(ctx, &())
    }

    /// Creates an `asin` operator for the context's preferred backend.
    pub fn create_asin(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.asin.create(ctx, &())
    }

    /// Creates an `atan` operator for the context's preferred backend.
    pub fn create_atan(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.atan.create(ctx, &())
    }

    /// Creates a `ceil` operator for the context's preferred backend.
    pub fn create_ceil(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.ceil.create(ctx, &())
    }

    /// Creates a `cos` operator for the context's preferred backend.
    pub fn create_cos(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.cos.create(ctx, &())
    }

    /// Creates a `cosh` operator for the context's preferred backend.
    pub fn create_cosh(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.cosh.create(ctx, &())
    }

    /// Creates an `exp` operator for the context's preferred backend.
    pub fn create_exp(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.exp.create(ctx, &())
    }

    /// Creates a `floor` operator for the context's preferred backend.
    pub fn create_floor(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.floor.create(ctx, &())
    }

    /// Creates a `log` operator for the context's preferred backend.
    pub fn create_log(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.log.create(ctx, &())
    }

    /// Creates a `round` operator for the context's preferred backend.
    pub fn create_round(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.round.create(ctx, &())
    }

    /// Creates a `sin` operator for the context's preferred backend.
    pub fn create_sin(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.sin.create(ctx, &())
    }

    /// Creates a `sinh` operator for the context's preferred backend.
    pub fn create_sinh(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.sinh.create(ctx, &())
    }

    /// Creates a `sqrt` operator for the context's preferred backend.
    pub fn create_sqrt(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.sqrt.create(ctx, &())
    }

    /// Creates a `square` operator for the context's preferred backend.
    pub fn create_square(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.square.create(ctx, &())
    }

    /// Creates a `tan` operator for the context's preferred backend.
    pub fn create_tan(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.tan.create(ctx, &())
    }

    /// Creates a `tanh` operator for the context's preferred backend.
    pub fn create_tanh(&self, ctx: &Context) -> Result<BoxedOperator, RegistryError> {
        self.tanh.create(ctx, &())
    }

    /// Creates an `add_scalar` operator with addend `val`.
    pub fn create_add_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.add_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates a `mul_scalar` operator with factor `val`.
    pub fn create_mul_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.mul_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates a `pow_scalar` operator with exponent `val`.
    pub fn create_pow_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.pow_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates an `r_pow_scalar` operator with base `val`.
    pub fn create_r_pow_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.r_pow_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates an `r_sub_scalar` operator with minuend `val`.
    pub fn create_r_sub_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.r_sub_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates an `r_div_scalar` operator with dividend `val`.
    pub fn create_r_div_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.r_div_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates a `maximum_scalar` operator with lower clamp `val`.
    pub fn create_maximum_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.maximum_scalar.create(ctx, &ScalarArg::new(val))
    }

    /// Creates a `minimum_scalar` operator with upper clamp `val`.
    pub fn create_minimum_scalar(
        &self,
        ctx: &Context,
        val: f64,
    ) -> Result<BoxedOperator, RegistryError> {
        self.minimum_scalar.create(ctx, &ScalarArg::new(val))
    }
}

impl Default for RegistryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryItem;
    use crate::Operator;
    use lattice_core::NdArray;

    struct Marker {
        name: &'static str,
        ctx: Context,
    }

    impl Operator for Marker {
        fn name(&self) -> &'static str {
            self.name
        }

        fn backend(&self) -> &str {
            "cpu"
        }

        fn context(&self) -> &Context {
            &self.ctx
        }

        fn apply(&self, input: &NdArray) -> NdArray {
            input.clone()
        }
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = RegistryTable::new();
        assert!(table.acos.backends().is_empty());
        assert!(table.r_pow_scalar.backends().is_empty());
        assert!(table.create_acos(&Context::default()).is_err());
    }

    #[test]
    fn test_table_fields_are_independent() {
        let mut table = RegistryTable::new();
        table.square.add(RegistryItem::new("cpu", |ctx: &Context, _: &()| {
            Box::new(Marker {
                name: "square",
                ctx: ctx.clone(),
            }) as crate::BoxedOperator
        }));

        let ctx = Context::default();
        assert!(table.create_square(&ctx).is_ok());
        assert!(table.create_abs(&ctx).is_err());
        assert!(table.create_acos(&ctx).is_err());
    }

    #[test]
    fn test_scalar_args_flow_through() {
        let mut table = RegistryTable::new();
        table
            .r_pow_scalar
            .add(RegistryItem::new("cpu", |ctx: &Context, args: &ScalarArg| {
                let name = if args.val == 2.0 { "base-two" } else { "other" };
                Box::new(Marker {
                    name,
                    ctx: ctx.clone(),
                }) as crate::BoxedOperator
            }));

        let op = table
            .create_r_pow_scalar(&Context::default(), 2.0)
            .unwrap();
        assert_eq!(op.name(), "base-two");
    }
}

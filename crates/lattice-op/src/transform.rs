//! Elementwise transform catalog.
//!
//! A transform is a pure scalar formula; backends differ only in how they
//! drive the loop over array elements. Parameterless transforms register
//! under the `()` argument bundle, scalar-parameterized ones under
//! [`ScalarArg`].

use serde::{Deserialize, Serialize};

/// Argument bundle for scalar-parameterized transforms.
///
/// Registries for this family have type `OperatorRegistry<ScalarArg>`, so a
/// parameterless creator can never be registered into — or looked up from —
/// a scalar-parameterized operator's registry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarArg {
    /// Value of the scalar.
    pub val: f64,
}

impl ScalarArg {
    /// Wraps a scalar value.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

/// A pure elementwise formula over `f64`.
///
/// Implementations carry their scalar parameters as plain fields; `eval`
/// must be deterministic and side-effect free.
pub trait UnaryTransform: Send + Sync + 'static {
    /// Operator name, also the registry-table field the transform lives in.
    const NAME: &'static str;

    /// Evaluates the transform at one element.
    fn eval(&self, x: f64) -> f64;
}

/// `y = |x|`
#[derive(Clone, Copy, Debug, Default)]
pub struct Abs;

impl UnaryTransform for Abs {
    const NAME: &'static str = "abs";

    fn eval(&self, x: f64) -> f64 {
        x.abs()
    }
}

/// `y = acos(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Acos;

impl UnaryTransform for Acos {
    const NAME: &'static str = "acos";

    fn eval(&self, x: f64) -> f64 {
        x.acos()
    }
}

/// `y = asin(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Asin;

impl UnaryTransform for Asin {
    const NAME: &'static str = "asin";

    fn eval(&self, x: f64) -> f64 {
        x.asin()
    }
}

/// `y = atan(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Atan;

impl UnaryTransform for Atan {
    const NAME: &'static str = "atan";

    fn eval(&self, x: f64) -> f64 {
        x.atan()
    }
}

/// `y = ceil(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Ceil;

impl UnaryTransform for Ceil {
    const NAME: &'static str = "ceil";

    fn eval(&self, x: f64) -> f64 {
        x.ceil()
    }
}

/// `y = cos(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Cos;

impl UnaryTransform for Cos {
    const NAME: &'static str = "cos";

    fn eval(&self, x: f64) -> f64 {
        x.cos()
    }
}

/// `y = cosh(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Cosh;

impl UnaryTransform for Cosh {
    const NAME: &'static str = "cosh";

    fn eval(&self, x: f64) -> f64 {
        x.cosh()
    }
}

/// `y = exp(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Exp;

impl UnaryTransform for Exp {
    const NAME: &'static str = "exp";

    fn eval(&self, x: f64) -> f64 {
        x.exp()
    }
}

/// `y = floor(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Floor;

impl UnaryTransform for Floor {
    const NAME: &'static str = "floor";

    fn eval(&self, x: f64) -> f64 {
        x.floor()
    }
}

/// `y = ln(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Log;

impl UnaryTransform for Log {
    const NAME: &'static str = "log";

    fn eval(&self, x: f64) -> f64 {
        x.ln()
    }
}

/// `y = round(x)`, half away from zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Round;

impl UnaryTransform for Round {
    const NAME: &'static str = "round";

    fn eval(&self, x: f64) -> f64 {
        x.round()
    }
}

/// `y = sin(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sin;

impl UnaryTransform for Sin {
    const NAME: &'static str = "sin";

    fn eval(&self, x: f64) -> f64 {
        x.sin()
    }
}

/// `y = sinh(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sinh;

impl UnaryTransform for Sinh {
    const NAME: &'static str = "sinh";

    fn eval(&self, x: f64) -> f64 {
        x.sinh()
    }
}

/// `y = sqrt(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sqrt;

impl UnaryTransform for Sqrt {
    const NAME: &'static str = "sqrt";

    fn eval(&self, x: f64) -> f64 {
        x.sqrt()
    }
}

/// `y = x²`
#[derive(Clone, Copy, Debug, Default)]
pub struct Square;

impl UnaryTransform for Square {
    const NAME: &'static str = "square";

    fn eval(&self, x: f64) -> f64 {
        x * x
    }
}

/// `y = tan(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Tan;

impl UnaryTransform for Tan {
    const NAME: &'static str = "tan";

    fn eval(&self, x: f64) -> f64 {
        x.tan()
    }
}

/// `y = tanh(x)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Tanh;

impl UnaryTransform for Tanh {
    const NAME: &'static str = "tanh";

    fn eval(&self, x: f64) -> f64 {
        x.tanh()
    }
}

/// `y = x + v`
#[derive(Clone, Copy, Debug)]
pub struct AddScalar {
    /// Addend `v`.
    pub val: f64,
}

impl AddScalar {
    /// Creates the transform with addend `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for AddScalar {
    const NAME: &'static str = "add_scalar";

    fn eval(&self, x: f64) -> f64 {
        x + self.val
    }
}

/// `y = x * v`
#[derive(Clone, Copy, Debug)]
pub struct MulScalar {
    /// Factor `v`.
    pub val: f64,
}

impl MulScalar {
    /// Creates the transform with factor `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for MulScalar {
    const NAME: &'static str = "mul_scalar";

    fn eval(&self, x: f64) -> f64 {
        x * self.val
    }
}

/// `y = x ^ v`
#[derive(Clone, Copy, Debug)]
pub struct PowScalar {
    /// Exponent `v`.
    pub val: f64,
}

impl PowScalar {
    /// Creates the transform with exponent `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for PowScalar {
    const NAME: &'static str = "pow_scalar";

    fn eval(&self, x: f64) -> f64 {
        x.powf(self.val)
    }
}

/// `y = v ^ x`
#[derive(Clone, Copy, Debug)]
pub struct RPowScalar {
    /// Base `v`.
    pub val: f64,
}

impl RPowScalar {
    /// Creates the transform with base `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for RPowScalar {
    const NAME: &'static str = "r_pow_scalar";

    fn eval(&self, x: f64) -> f64 {
        self.val.powf(x)
    }
}

/// `y = v - x`
#[derive(Clone, Copy, Debug)]
pub struct RSubScalar {
    /// Minuend `v`.
    pub val: f64,
}

impl RSubScalar {
    /// Creates the transform with minuend `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for RSubScalar {
    const NAME: &'static str = "r_sub_scalar";

    fn eval(&self, x: f64) -> f64 {
        self.val - x
    }
}

/// `y = v / x`
#[derive(Clone, Copy, Debug)]
pub struct RDivScalar {
    /// Dividend `v`.
    pub val: f64,
}

impl RDivScalar {
    /// Creates the transform with dividend `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for RDivScalar {
    const NAME: &'static str = "r_div_scalar";

    fn eval(&self, x: f64) -> f64 {
        self.val / x
    }
}

/// `y = max(x, v)`
#[derive(Clone, Copy, Debug)]
pub struct MaximumScalar {
    /// Lower clamp `v`.
    pub val: f64,
}

impl MaximumScalar {
    /// Creates the transform with clamp `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for MaximumScalar {
    const NAME: &'static str = "maximum_scalar";

    fn eval(&self, x: f64) -> f64 {
        x.max(self.val)
    }
}

/// `y = min(x, v)`
#[derive(Clone, Copy, Debug)]
pub struct MinimumScalar {
    /// Upper clamp `v`.
    pub val: f64,
}

impl MinimumScalar {
    /// Creates the transform with clamp `val`.
    pub fn new(val: f64) -> Self {
        Self { val }
    }
}

impl UnaryTransform for MinimumScalar {
    const NAME: &'static str = "minimum_scalar";

    fn eval(&self, x: f64) -> f64 {
        x.min(self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_acos_formula() {
        assert!((Acos.eval(0.0) - PI / 2.0).abs() < 1e-12);
        assert!(Acos.eval(1.0).abs() < 1e-12);
        assert!((Acos.eval(-1.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_r_pow_scalar_formula() {
        let t = RPowScalar::new(2.0);
        assert_eq!(t.eval(0.0), 1.0);
        assert_eq!(t.eval(1.0), 2.0);
        assert_eq!(t.eval(3.0), 8.0);
    }

    #[test]
    fn test_reversed_scalar_operand_order() {
        assert_eq!(RSubScalar::new(10.0).eval(3.0), 7.0);
        assert_eq!(RDivScalar::new(8.0).eval(2.0), 4.0);
        assert_eq!(PowScalar::new(2.0).eval(3.0), 9.0);
    }

    #[test]
    fn test_square() {
        assert_eq!(Square.eval(-3.0), 9.0);
    }

    #[test]
    fn test_scalar_clamps() {
        assert_eq!(MaximumScalar::new(0.0).eval(-1.0), 0.0);
        assert_eq!(MinimumScalar::new(1.0).eval(2.0), 1.0);
    }
}

//! Backend preference context for operator creation.

use serde::{Deserialize, Serialize};

/// Describes where computation should run.
///
/// A context carries an ordered list of backend identifiers, most-preferred
/// first. Operator registries try each identifier in order and construct the
/// implementation from the first backend that has a creator registered.
/// Identifiers are compared exactly; there is no normalization or case
/// folding.
///
/// Contexts are cheap to clone and are never mutated by a create call.
///
/// # Example
///
/// ```
/// use lattice_core::Context;
///
/// let ctx = Context::new()
///     .with_backend("cuda")
///     .with_backend("cpu");
///
/// assert_eq!(ctx.backends(), &["cuda".to_string(), "cpu".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    backends: Vec<String>,
}

impl Context {
    /// Creates a context with no backend preference.
    ///
    /// A registry queried with an empty preference list always fails, so
    /// callers should add at least one backend before creating operators.
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Appends a backend identifier to the preference list.
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backends.push(backend.into());
        self
    }

    /// Creates a context from an ordered list of backend identifiers.
    pub fn from_backends<I, S>(backends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            backends: backends.into_iter().map(Into::into).collect(),
        }
    }

    /// Backend identifiers in preference order, most-preferred first.
    pub fn backends(&self) -> &[String] {
        &self.backends
    }
}

/// The default context prefers the serial CPU backend, which every
/// process has registered.
impl Default for Context {
    fn default() -> Self {
        Self::new().with_backend("cpu")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_default_is_cpu() {
        let ctx = Context::default();
        assert_eq!(ctx.backends(), &["cpu".to_string()]);
    }

    #[test]
    fn test_context_preserves_order() {
        let ctx = Context::new()
            .with_backend("cuda")
            .with_backend("cpu-parallel")
            .with_backend("cpu");
        assert_eq!(
            ctx.backends(),
            &[
                "cuda".to_string(),
                "cpu-parallel".to_string(),
                "cpu".to_string()
            ]
        );
    }

    #[test]
    fn test_context_from_backends() {
        let ctx = Context::from_backends(["a", "b"]);
        assert_eq!(ctx.backends(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_context_serde_round_trip() {
        let ctx = Context::from_backends(["cuda", "cpu"]);
        let json = serde_json::to_string(&ctx).unwrap();
        let back: Context = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}

//! Per-operator creator registries.
//!
//! Each operator owns one [`OperatorDb`]: an append-only, ordered store of
//! backend-identifier → creator bindings. Lookup walks the caller's backend
//! preference list in order and, for each candidate, scans the stored items
//! in insertion order — so caller preference always outranks registration
//! order, and registration order only tie-breaks duplicate registrations of
//! the same backend.
//!
//! Registration is expected to finish during single-threaded startup;
//! afterwards the database is read-only and queries are safe from any number
//! of threads.

use lattice_core::Context;
use tracing::{debug, trace};

use crate::error::RegistryError;
use crate::operator::BoxedOperator;

/// Type-erased creator for one (operator, backend) pair.
///
/// Given a context and the operator's argument bundle, constructs a fresh
/// concrete instance behind the [`Operator`](crate::Operator) interface.
/// Creation itself cannot fail; allocation of the instance is the only
/// resource acquired.
pub type CreatorFn<A> = Box<dyn Fn(&Context, &A) -> BoxedOperator + Send + Sync>;

/// One backend-identifier → creator binding.
pub struct RegistryItem<A> {
    /// Backend identifier this creator serves.
    pub backend: String,
    /// Creator invoked when the backend is selected.
    pub create: CreatorFn<A>,
}

impl<A> RegistryItem<A> {
    /// Creates an item from a backend identifier and a creator closure.
    pub fn new<F>(backend: impl Into<String>, create: F) -> Self
    where
        F: Fn(&Context, &A) -> BoxedOperator + Send + Sync + 'static,
    {
        Self {
            backend: backend.into(),
            create: Box::new(create),
        }
    }
}

/// Append-only store of creator bindings for one operator.
///
/// The container does not enforce backend uniqueness: duplicate
/// registrations are stored, and lookup returns the first-inserted match.
pub struct OperatorDb<A> {
    operator: &'static str,
    items: Vec<RegistryItem<A>>,
}

impl<A> OperatorDb<A> {
    /// Creates an empty database for the named operator.
    pub fn new(operator: &'static str) -> Self {
        Self {
            operator,
            items: Vec::new(),
        }
    }

    /// Appends a binding. Never fails; insertion order is preserved.
    pub fn add(&mut self, item: RegistryItem<A>) {
        debug!(
            operator = self.operator,
            backend = %item.backend,
            "registered operator backend"
        );
        self.items.push(item);
    }

    /// Resolves a backend preference list to a creator.
    ///
    /// Tries each requested identifier in order; the first candidate with
    /// any registered item wins, and within one candidate the first-inserted
    /// item wins. Pure read — safe to call concurrently once registration
    /// has finished.
    pub fn query(&self, requested: &[String]) -> Result<&CreatorFn<A>, RegistryError> {
        for backend in requested {
            trace!(
                operator = self.operator,
                backend = %backend,
                "trying requested backend"
            );
            if let Some(item) = self.items.iter().find(|item| item.backend == *backend) {
                return Ok(&item.create);
            }
        }

        Err(RegistryError::BackendNotFound {
            operator: self.operator,
            requested: requested.to_vec(),
            registered: self.backends().iter().map(|b| b.to_string()).collect(),
        })
    }

    /// Registered backend identifiers, in insertion order.
    pub fn backends(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.backend.as_str()).collect()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Typed facade binding one operator and one argument bundle to a database.
///
/// Each distinct (operator, argument bundle) pair gets its own registry
/// instance, so mixing constructor signatures is a compile error rather than
/// a runtime surprise. `A` is the operator family's argument bundle: `()`
/// for parameterless transforms, [`ScalarArg`](crate::ScalarArg) for
/// scalar-parameterized ones.
pub struct OperatorRegistry<A> {
    db: OperatorDb<A>,
}

impl<A> OperatorRegistry<A> {
    /// Creates an empty registry for the named operator.
    pub fn new(operator: &'static str) -> Self {
        Self {
            db: OperatorDb::new(operator),
        }
    }

    /// The operator this registry serves.
    pub fn operator(&self) -> &'static str {
        self.db.operator
    }

    /// Registers a creator binding.
    pub fn add(&mut self, item: RegistryItem<A>) {
        self.db.add(item);
    }

    /// Creates an operator instance for the context's preferred backend.
    ///
    /// Queries the database with the context's backend list, then invokes
    /// the matching creator with `(ctx, args)` and returns its result
    /// directly — no wrapping, no caching. Lookup failure propagates
    /// unchanged.
    pub fn create(&self, ctx: &Context, args: &A) -> Result<BoxedOperator, RegistryError> {
        let create = self.db.query(ctx.backends())?;
        Ok(create(ctx, args))
    }

    /// Registered backend identifiers, in insertion order.
    pub fn backends(&self) -> Vec<&str> {
        self.db.backends()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::NdArray;

    struct Probe {
        name: &'static str,
        backend: String,
        ctx: Context,
    }

    impl crate::Operator for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn backend(&self) -> &str {
            &self.backend
        }

        fn context(&self) -> &Context {
            &self.ctx
        }

        fn apply(&self, input: &NdArray) -> NdArray {
            input.clone()
        }
    }

    fn probe_item(backend: &str, name: &'static str) -> RegistryItem<()> {
        let backend_owned = backend.to_string();
        RegistryItem::new(backend, move |ctx: &Context, _args: &()| {
            Box::new(Probe {
                name,
                backend: backend_owned.clone(),
                ctx: ctx.clone(),
            }) as BoxedOperator
        })
    }

    #[test]
    fn test_first_candidate_precedence() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("a", "impl_a"));
        registry.add(probe_item("b", "impl_b"));

        let ctx = Context::from_backends(["a", "b"]);
        let op = registry.create(&ctx, &()).unwrap();
        assert_eq!(op.backend(), "a");
    }

    #[test]
    fn test_caller_preference_outranks_registration_order() {
        // "b" registered first, but the caller asks for "a" first.
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("b", "impl_b"));
        registry.add(probe_item("a", "impl_a"));

        let ctx = Context::from_backends(["a", "b"]);
        let op = registry.create(&ctx, &()).unwrap();
        assert_eq!(op.backend(), "a");
    }

    #[test]
    fn test_fallback_to_second_candidate() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("b", "impl_b"));

        let ctx = Context::from_backends(["unregistered", "b"]);
        let op = registry.create(&ctx, &()).unwrap();
        assert_eq!(op.backend(), "b");
    }

    #[test]
    fn test_duplicate_backend_first_inserted_wins() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("a", "impl1"));
        registry.add(probe_item("a", "impl2"));

        let ctx = Context::from_backends(["a"]);
        let op = registry.create(&ctx, &()).unwrap();
        assert_eq!(op.name(), "impl1");
    }

    #[test]
    fn test_not_found_lists_requested_and_registered() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("cpu", "impl_cpu"));
        registry.add(probe_item("cpu-parallel", "impl_par"));

        let ctx = Context::from_backends(["cuda", "opencl"]);
        let err = registry.create(&ctx, &()).err().unwrap();
        let msg = err.to_string();
        assert!(msg.contains("probe"));
        assert!(msg.contains("cuda"));
        assert!(msg.contains("opencl"));
        assert!(msg.contains("cpu"));
        assert!(msg.contains("cpu-parallel"));
    }

    #[test]
    fn test_empty_preference_list_fails() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("cpu", "impl_cpu"));

        let err = registry.create(&Context::new(), &()).err().unwrap();
        assert!(matches!(err, RegistryError::BackendNotFound { .. }));
    }

    #[test]
    fn test_add_then_query_immediately() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("cpu", "impl_cpu"));

        let op = registry.create(&Context::default(), &()).unwrap();
        assert_eq!(op.backend(), "cpu");
        assert_eq!(op.context().backends(), &["cpu".to_string()]);
    }

    #[test]
    fn test_registries_are_independent() {
        let mut first = OperatorRegistry::<()>::new("first");
        let second = OperatorRegistry::<()>::new("second");
        first.add(probe_item("cpu", "impl_cpu"));

        let ctx = Context::default();
        assert!(first.create(&ctx, &()).is_ok());
        assert!(second.create(&ctx, &()).is_err());
    }

    #[test]
    fn test_backends_in_insertion_order() {
        let mut registry = OperatorRegistry::<()>::new("probe");
        registry.add(probe_item("b", "impl_b"));
        registry.add(probe_item("a", "impl_a"));
        assert_eq!(registry.backends(), vec!["b", "a"]);
    }
}

//! Registry error types.

use thiserror::Error;

/// Errors from operator registry lookup.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// None of the requested backends has a creator registered for the
    /// operator.
    ///
    /// Carries both sides of the mismatch so the caller can see immediately
    /// which identifiers were asked for and which are actually available.
    #[error(
        "operator `{operator}`: no creator for any requested backend \
         {requested:?} (registered: {registered:?})"
    )]
    BackendNotFound {
        /// Operator whose registry was queried.
        operator: &'static str,
        /// Backend identifiers requested, most-preferred first.
        requested: Vec<String>,
        /// Backend identifiers registered for the operator, in registration
        /// order.
        registered: Vec<String>,
    },
}

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned by [`Registry::register`](crate::registry::Registry::register).
///
/// A failed registration never modifies the entries that were already registered.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Storage for the new entry could not be reserved.
    #[error("cannot allocate registry entry for `{name}`")]
    Allocation {
        name: String,
        #[source]
        source: TryReserveError,
    },

    /// Command names must contain at least one character.
    #[error("command name must not be empty")]
    EmptyName,
}

//! Ordered name-to-action bindings.
//!
//! The registry is a plain list rather than a map: one name may be bound to several
//! actions, and lookup visits the most recently registered entry first.

use crate::builtin::{Exit, Print};
use crate::command::Action;
use crate::error::RegistryError;
use tracing::debug;

/// A single name-to-action binding.
pub struct CommandEntry {
    /// Name compared case-sensitively against the lowercased command name.
    pub name: String,
    /// Behavior invoked when the name matches.
    pub action: Box<dyn Action>,
}

/// Ordered collection of [`CommandEntry`] values.
///
/// Entries are stored in registration order and traversed newest first.
#[derive(Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in commands.
    ///
    /// `exit` is registered before `print`, so `print` is visited first.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register("exit", Exit)?;
        registry.register("print", Print)?;
        Ok(registry)
    }

    /// Bind `action` to `name`.
    ///
    /// Duplicate names are kept: every entry with a matching name stays live and is
    /// found by [`Registry::find_all`]. Names should be lowercase, since typed command
    /// names are lowercased before lookup.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        action: impl Action + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if let Err(source) = self.entries.try_reserve(1) {
            return Err(RegistryError::Allocation { name, source });
        }

        debug!(command = %name, "registering command");
        self.entries.push(CommandEntry {
            name,
            action: Box::new(action),
        });
        Ok(())
    }

    /// Every entry in traversal order, most recently registered first.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter().rev()
    }

    /// Lazily yields the action of every entry named `name`, newest first.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a dyn Action> + 'a {
        self.iter()
            .filter(move |entry| entry.name == name)
            .map(|entry| -> &'a dyn Action { entry.action.as_ref() })
    }

    /// Registered names in traversal order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|entry| entry.name.as_str())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

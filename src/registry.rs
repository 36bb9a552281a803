//! Name-keyed check registry.
//!
//! An explicit value passed to the orchestrator rather than process-global
//! state. The registry only locates checks; it holds no behavior of its own.
//! It is populated once at startup and read-only afterwards, so shared
//! references are safe across threads.

use crate::check::Check;
use crate::checks::builtin_checks;

/// Registry lookup and registration errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A check with the same name is already registered.
    #[error("check '{0}' is already registered")]
    DuplicateName(String),

    /// No check with the given name exists.
    #[error("check '{0}' not found")]
    NotFound(String),
}

/// A name-keyed lookup of [`Check`] instances.
///
/// Iteration over [`CheckRegistry::all`] and [`CheckRegistry::by_group`]
/// follows registration order.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in checks.
    pub fn with_builtin_checks() -> Self {
        let mut registry = Self::new();
        for check in builtin_checks() {
            // Built-in names are unique; see checks::tests.
            if let Err(err) = registry.register(check) {
                log::warn!("skipping builtin check: {err}");
            }
        }
        registry
    }

    /// Register a check. Fails if its name is already taken.
    pub fn register(&mut self, check: Box<dyn Check>) -> Result<(), RegistryError> {
        if self.checks.iter().any(|c| c.name() == check.name()) {
            return Err(RegistryError::DuplicateName(check.name().to_string()));
        }
        log::debug!("registered check '{}'", check.name());
        self.checks.push(check);
        Ok(())
    }

    /// Look up a check by name.
    pub fn get(&self, name: &str) -> Result<&dyn Check, RegistryError> {
        self.checks
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// All registered checks.
    pub fn all(&self) -> Vec<&dyn Check> {
        self.checks.iter().map(|c| c.as_ref()).collect()
    }

    /// The checks whose groups contain `group`.
    pub fn by_group(&self, group: &str) -> Vec<&dyn Check> {
        self.checks
            .iter()
            .filter(|c| c.groups().contains(&group))
            .map(|c| c.as_ref())
            .collect()
    }
}

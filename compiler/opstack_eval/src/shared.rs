//! Thread-safe handle to a frozen operator registry.

use std::fmt;
use std::sync::Arc;

use crate::registry::OperatorRegistry;

/// Read-only operator registry behind an `Arc`.
///
/// Evaluators hold their registry through this handle, so any number of
/// them, on any number of threads, can share one table. There is no way to
/// mutate the registry once it is wrapped.
#[derive(Clone)]
pub struct SharedRegistry(Arc<OperatorRegistry>);

impl SharedRegistry {
    pub fn new(registry: OperatorRegistry) -> Self {
        SharedRegistry(Arc::new(registry))
    }

    /// Shared handle to the standard operators.
    pub fn standard() -> Self {
        Self::new(OperatorRegistry::standard())
    }

    /// Whether both handles point at the same registry.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedRegistry {
    type Target = OperatorRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<OperatorRegistry> for SharedRegistry {
    fn from(registry: OperatorRegistry) -> Self {
        Self::new(registry)
    }
}

impl fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("operators", &self.0.len())
            .finish_non_exhaustive()
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::engine::HiringRegistry;

/// Cloneable handle that serializes every registry operation behind one lock.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<HiringRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: HiringRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs `operation` with exclusive access to the registry.
    ///
    /// Operations validate before mutating, so state behind a poisoned lock is still consistent.
    pub fn with<T>(&self, operation: impl FnOnce(&mut HiringRegistry) -> T) -> T {
        let mut guard = self.lock();
        operation(&mut guard)
    }

    fn lock(&self) -> MutexGuard<'_, HiringRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<HiringRegistry> for SharedRegistry {
    fn from(registry: HiringRegistry) -> Self {
        Self::new(registry)
    }
}

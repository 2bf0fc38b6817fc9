// ============================================================================
// Scale Registry
// Shared default-scale storage for the facade layer
// ============================================================================

use parking_lot::RwLock;

/// Thread-safe store of the default scale applied when a call site omits an
/// explicit one.
///
/// This is the only mutable state in the crate. The engine never touches
/// it; the facade resolves the effective scale here and passes it into the
/// engine as a plain argument.
#[derive(Debug)]
pub struct ScaleRegistry {
    scale: RwLock<usize>,
}

impl ScaleRegistry {
    /// Create a registry with the given starting default.
    pub fn new(default_scale: usize) -> Self {
        Self {
            scale: RwLock::new(default_scale),
        }
    }

    /// Current default scale.
    pub fn get(&self) -> usize {
        *self.scale.read()
    }

    /// Replace the default scale, returning the previous value.
    pub fn set(&self, scale: usize) -> usize {
        let mut guard = self.scale.write();
        std::mem::replace(&mut *guard, scale)
    }
}

impl Default for ScaleRegistry {
    /// Fresh registries start at scale 0: whole-number results.
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let registry = ScaleRegistry::default();
        assert_eq!(registry.get(), 0);
        assert_eq!(registry.set(5), 0);
        assert_eq!(registry.get(), 5);
        assert_eq!(registry.set(2), 5);
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let registry = Arc::new(ScaleRegistry::new(3));
        let other = Arc::clone(&registry);
        let handle = std::thread::spawn(move || other.get());
        assert_eq!(handle.join().unwrap(), 3);
    }
}

//! Post-unmount write guard for async data hooks.
//!
//! A hook spawns its fetch on mount and registers [`MountGuard::release`]
//! with `on_cleanup`. The request is never aborted; its result is dropped if
//! the owning component is gone by the time it settles.

#[cfg(test)]
#[path = "mount_guard_test.rs"]
mod mount_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Mark the owner as unmounted. Later deliveries are discarded.
    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Hand `value` to `apply` only while still mounted. Returns whether it was applied.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_mounted() {
            return false;
        }
        apply(value);
        true
    }
}

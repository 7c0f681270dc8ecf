//! Batch-scoped uniqueness of layout signatures.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::layout::model::{Layout, LayoutSignature};

/// Default resample budget per task before giving up on uniqueness.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Set of signatures already emitted in the current batch.
#[derive(Debug, Default)]
pub struct UniquenessTracker {
    seen: HashSet<LayoutSignature>,
}

impl UniquenessTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `layout`; `false` if an equivalent layout was already registered.
    pub fn register(&mut self, layout: &Layout) -> bool {
        self.register_signature(layout.signature())
    }

    /// Record a precomputed signature.
    pub fn register_signature(&mut self, signature: LayoutSignature) -> bool {
        self.seen.insert(signature)
    }

    /// Number of unique signatures seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True before the first registration.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Registration seam used by generators, so sequential and parallel batches share one loop.
pub trait SignatureRegistry {
    /// Atomically check-and-insert; `true` when `layout` is new.
    fn register(&self, layout: &Layout) -> bool;
}

/// Mutex-guarded tracker for batches generated across worker threads.
#[derive(Debug, Default)]
pub struct SharedUniquenessTracker {
    inner: Mutex<UniquenessTracker>,
}

impl SharedUniquenessTracker {
    /// Empty shared tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unique signatures seen.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True before the first registration.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UniquenessTracker> {
        // HashSet::insert leaves the set intact if the holder panicked.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SignatureRegistry for SharedUniquenessTracker {
    fn register(&self, layout: &Layout) -> bool {
        self.lock().register(layout)
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry/registry.rs"]
mod tests;

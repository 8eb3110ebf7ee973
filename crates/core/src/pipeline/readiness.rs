use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-way "landmark model loaded" flag shared with the loader thread.
///
/// Clones observe the same flag. Once set it stays set.
#[derive(Clone, Debug, Default)]
pub struct ModelReadiness(Arc<AtomicBool>);

impl ModelReadiness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already-set flag, for callers that have no model to wait on.
    pub fn ready() -> Self {
        let readiness = Self::new();
        readiness.mark_ready();
        readiness
    }

    pub fn mark_ready(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

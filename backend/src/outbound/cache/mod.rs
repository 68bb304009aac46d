//! In-memory list-view invalidation adapter.
//!
//! Implements the [`ListViewCache`] port with a monotonically increasing
//! version per named view. The mutation pipeline bumps the version after a
//! confirmed persist; consumers serving cached renders compare versions and
//! recompute when stale. Nothing blocks on consumers — a narrow staleness
//! window after a mutation is accepted.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::ListViewCache;

/// Version registry backing the invalidation signal.
#[derive(Debug, Default)]
pub struct InMemoryViewVersions {
    versions: RwLock<HashMap<String, u64>>,
}

impl InMemoryViewVersions {
    /// Create an empty registry; every view starts at version zero.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListViewCache for InMemoryViewVersions {
    async fn invalidate(&self, view: &str) {
        // Poisoning only happens if a writer panicked; dropping the signal is
        // acceptable for a fire-and-forget notification.
        if let Ok(mut versions) = self.versions.write() {
            let version = versions.entry(view.to_owned()).or_insert(0);
            *version += 1;
            debug!(view, version = *version, "list view invalidated");
        }
    }

    async fn version(&self, view: &str) -> u64 {
        self.versions
            .read()
            .ok()
            .and_then(|versions| versions.get(view).copied())
            .unwrap_or(0)
    }
}

//! Port for the list-view invalidation signal.

use async_trait::async_trait;

/// Logical name of the invoice list view used for invalidation.
pub const INVOICE_LIST_VIEW: &str = "dashboard/invoices";

/// Fire-and-forget staleness signalling for cached list renders.
///
/// The mutation orchestrator emits [`ListViewCache::invalidate`] after a
/// confirmed persist; whatever serves cached renders consumes the version to
/// decide whether a recompute is due. No acknowledgement is awaited and
/// invalidation cannot fail from the caller's perspective.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListViewCache: Send + Sync {
    /// Mark the named view as stale.
    async fn invalidate(&self, view: &str);

    /// Current staleness version of the named view.
    ///
    /// Consumers recompute whenever the version moved since their last read.
    async fn version(&self, view: &str) -> u64;
}

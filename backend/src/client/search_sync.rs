//! Query-state synchroniser for the invoice list.
//!
//! Keeps the address in sync with the filter input. Free-text changes are
//! debounced: each event resets a single pending timer, and only the last
//! event in a burst is acted on once a quiescence window elapses — earlier
//! values are discarded, not queued. Acting on a text change resets
//! pagination to page 1; selecting a page navigates immediately and preserves
//! the filter. The synchroniser owns no state beyond the live query state; a
//! navigation request is the only output.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::domain::query_state::QueryState;

/// Quiescence window applied to free-text input.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// A request to move the address to a new query state without a full reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Encoded address, e.g. `/dashboard/invoices?query=acme&page=1`.
    pub target: String,
    /// The state the target encodes.
    pub state: QueryState,
}

enum SyncEvent {
    Input(String),
    Page(u32),
}

/// Debouncing bridge between raw input events and navigation requests.
pub struct SearchSynchronizer {
    events: mpsc::UnboundedSender<SyncEvent>,
    // Held so the worker is tied to the synchroniser's lifetime.
    _worker: JoinHandle<()>,
}

impl SearchSynchronizer {
    /// Spawn a synchroniser for the given path and current address state.
    ///
    /// Navigation requests are emitted on `navigations`; the worker stops
    /// when the synchroniser is dropped.
    pub fn spawn(
        path: impl Into<String>,
        current: QueryState,
        window: Duration,
        navigations: mpsc::UnboundedSender<Navigation>,
    ) -> Self {
        let (events, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run(path.into(), current, window, rx, navigations));
        Self {
            events,
            _worker: worker,
        }
    }

    /// Record a raw text-input change; acted on after the quiescence window.
    pub fn input(&self, text: impl Into<String>) {
        let _ = self.events.send(SyncEvent::Input(text.into()));
    }

    /// Select a page; navigates immediately without debouncing.
    pub fn select_page(&self, page: u32) {
        let _ = self.events.send(SyncEvent::Page(page));
    }
}

fn navigate(path: &str, state: &QueryState, navigations: &mpsc::UnboundedSender<Navigation>) {
    let target = state.to_target(path);
    debug!(%target, "navigation requested");
    let _ = navigations.send(Navigation {
        target,
        state: state.clone(),
    });
}

async fn run(
    path: String,
    mut state: QueryState,
    window: Duration,
    mut events: mpsc::UnboundedReceiver<SyncEvent>,
    navigations: mpsc::UnboundedSender<Navigation>,
) {
    // Timer-reset debounce: one pending value, one deadline. Each input event
    // replaces both, so only the last event in a burst survives to act.
    let mut pending: Option<String> = None;
    let mut deadline = Instant::now();
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SyncEvent::Input(text)) => {
                    pending = Some(text);
                    deadline = Instant::now() + window;
                }
                Some(SyncEvent::Page(page)) => {
                    state = state.with_page(page);
                    navigate(&path, &state, &navigations);
                }
                None => break,
            },
            () = sleep_until(deadline), if pending.is_some() => {
                if let Some(text) = pending.take() {
                    state = state.with_query(text);
                    navigate(&path, &state, &navigations);
                }
            }
        }
    }
}

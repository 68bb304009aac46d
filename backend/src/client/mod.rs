//! Client-resident helpers for the list view.

pub mod search_sync;

pub use search_sync::{Navigation, SearchSynchronizer, DEBOUNCE_WINDOW};

//! Wander - Places State Container
//!
//! The in-memory state container behind the browsing UI.
//!
//! This crate provides:
//! - Current place list (post-filter), favorites, and loading flag
//! - Search with simulated latency and superseded-search cancellation
//! - Favorite toggling with fire-and-forget persistence
//! - Store events for UI synchronization
//!
//! # Architecture
//!
//! `wander-store` is completely presentation-agnostic: it owns state and
//! operations, and the UI observes snapshots plus the event stream. The
//! favorites persistence backend is provided via the `FavoritesStorage`
//! trait from `wander-core`.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wander_store::PlacesStore;
//! use wander_core::PlaceId;
//!
//! # async fn example(storage: Arc<dyn wander_core::FavoritesStorage>) {
//! let store = PlacesStore::new(wander_fixtures::places().to_vec(), storage).await;
//!
//! // Kick off a search; the UI reads `is_loading()` meanwhile
//! let search = store.search_places("鼎泰豐", None);
//! search.await.ok();
//! assert_eq!(store.places().len(), 1);
//!
//! // Favorites work regardless of the active filter
//! store.toggle_favorite(&PlaceId::new("1"));
//! assert!(store.is_favorite(&PlaceId::new("1")));
//! # }
//! ```

mod events;
pub mod search;
mod store;

// Public exports
pub use events::StoreEvent;
pub use store::{PlacesStore, DEFAULT_SEARCH_DELAY};

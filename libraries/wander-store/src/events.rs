//! Store Events
//!
//! Event-based communication for UI synchronization. Events are emitted at
//! key points:
//! - Search lifecycle (scheduled / completed)
//! - Favorite changes (added / removed)
//!
//! Superseded searches emit nothing; only the winning completion is observed.

use serde::{Deserialize, Serialize};
use wander_core::PlaceId;

/// Events emitted by the places store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A search was scheduled and the store entered the loading state
    SearchStarted,

    /// A search completed and replaced the displayed place list
    SearchCompleted {
        /// Number of places in the new list
        count: usize,
    },

    /// A place was added to the favorites
    FavoriteAdded {
        /// ID of the favorited place
        place_id: PlaceId,
    },

    /// A place was removed from the favorites
    FavoriteRemoved {
        /// ID of the unfavorited place
        place_id: PlaceId,
    },
}

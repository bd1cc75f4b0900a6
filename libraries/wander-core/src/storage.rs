//! Storage trait for favorites persistence

use crate::error::Result;
use crate::types::PlaceId;
use async_trait::async_trait;

/// Durable storage collaborator for the favorites list
///
/// The store persists the full favorite id list on every toggle and reads it
/// back once at construction. Implementations may be durable (database, file)
/// or process-lifetime only; the store treats failures as non-fatal.
#[async_trait]
pub trait FavoritesStorage: Send + Sync {
    /// Load the previously persisted favorite ids
    ///
    /// Returns an empty list when nothing has been persisted yet.
    async fn load(&self) -> Result<Vec<PlaceId>>;

    /// Persist the full favorite id list
    ///
    /// Replaces whatever was stored before.
    async fn save(&self, ids: &[PlaceId]) -> Result<()>;
}

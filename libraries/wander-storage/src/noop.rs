//! No-op favorites backend

use async_trait::async_trait;
use tracing::debug;
use wander_core::{FavoritesStorage, PlaceId, Result};

/// Favorites backend that persists nothing
///
/// The default until a durable backend exists: favorites live only in the
/// store's memory, saves are logged and discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFavoritesStorage;

impl NoopFavoritesStorage {
    /// Create the no-op backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FavoritesStorage for NoopFavoritesStorage {
    async fn load(&self) -> Result<Vec<PlaceId>> {
        Ok(Vec::new())
    }

    async fn save(&self, ids: &[PlaceId]) -> Result<()> {
        debug!("Skipping favorites save, no durable backend: {} ids", ids.len());
        Ok(())
    }
}

//! In-memory favorites backend

use crate::error::StorageError;
use async_trait::async_trait;
use std::sync::RwLock;
use tracing::debug;
use wander_core::{FavoritesStorage, PlaceId, Result};

/// Favorites backend holding the id list in memory
///
/// Process-lifetime only; nothing survives a restart. Useful for tests and
/// as a working stand-in until a durable backend exists.
#[derive(Debug, Default)]
pub struct MemoryFavoritesStorage {
    ids: RwLock<Vec<PlaceId>>,
}

impl MemoryFavoritesStorage {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with ids, as if persisted earlier
    pub fn seeded(ids: Vec<PlaceId>) -> Self {
        Self {
            ids: RwLock::new(ids),
        }
    }
}

#[async_trait]
impl FavoritesStorage for MemoryFavoritesStorage {
    async fn load(&self) -> Result<Vec<PlaceId>> {
        let ids = self
            .ids
            .read()
            .map_err(|_| StorageError::Unavailable("favorites lock poisoned".into()))?;
        Ok(ids.clone())
    }

    async fn save(&self, ids: &[PlaceId]) -> Result<()> {
        let mut stored = self
            .ids
            .write()
            .map_err(|_| StorageError::Unavailable("favorites lock poisoned".into()))?;
        debug!("Saving {} favorites", ids.len());
        *stored = ids.to_vec();
        Ok(())
    }
}

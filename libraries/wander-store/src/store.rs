//! Places state container
//!
//! Owns the currently displayed place list, the favorites list, and the
//! loading flag. All reads and writes go through the operation set here;
//! the presentation layer observes snapshots and the event stream.
//!
//! Favorite lookups resolve against the full catalog, not the filtered
//! list, so a place stays favoritable after a search has hidden it.

use crate::events::StoreEvent;
use crate::search::filter_places;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use wander_core::{FavoritesStorage, Place, PlaceId};

/// Simulated search latency applied before a search completes
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Store event channel capacity
const EVENT_CAPACITY: usize = 64;

/// Mutable store state behind one lock
///
/// Critical sections are short and never held across an await point.
#[derive(Debug)]
struct StoreState {
    /// Currently displayed places (post-filter), in catalog order
    places: Vec<Place>,

    /// Favorited place ids, in toggle order
    favorites: Vec<PlaceId>,

    /// Whether a search is pending
    is_loading: bool,

    /// Search generation; a completion only applies if its epoch is current
    search_epoch: u64,
}

/// In-memory places/favorites state container
///
/// Cheap to clone; clones share the same state, like any other handle the
/// presentation layer passes around.
#[derive(Clone)]
pub struct PlacesStore {
    /// Full immutable catalog (the fixture set)
    catalog: Arc<Vec<Place>>,

    state: Arc<RwLock<StoreState>>,

    /// Favorites persistence collaborator
    storage: Arc<dyn FavoritesStorage>,

    /// Simulated latency before a search completes
    search_delay: Duration,

    events: broadcast::Sender<StoreEvent>,
}

impl PlacesStore {
    /// Create a store over the given catalog
    ///
    /// Favorites are hydrated from the storage collaborator; ids that no
    /// longer exist in the catalog are dropped. A load failure leaves the
    /// favorites empty and is logged, never surfaced.
    pub async fn new(catalog: Vec<Place>, storage: Arc<dyn FavoritesStorage>) -> Self {
        let favorites = match storage.load().await {
            Ok(ids) => {
                let known: Vec<PlaceId> = ids
                    .into_iter()
                    .filter(|id| catalog.iter().any(|p| &p.id == id))
                    .collect();
                debug!("Loaded {} favorites", known.len());
                known
            }
            Err(e) => {
                warn!("Failed to load favorites: {e}");
                Vec::new()
            }
        };

        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            state: Arc::new(RwLock::new(StoreState {
                places: catalog.clone(),
                favorites,
                is_loading: false,
                search_epoch: 0,
            })),
            catalog: Arc::new(catalog),
            storage,
            search_delay: DEFAULT_SEARCH_DELAY,
            events,
        }
    }

    /// Override the simulated search latency
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Schedule a search over the catalog
    ///
    /// Sets the loading flag synchronously, then recomputes the displayed
    /// list after the simulated latency: a non-empty `query` keeps places
    /// whose name or address contains it case-insensitively, and a category
    /// keeps places whose category equals it exactly. An empty query with no
    /// category restores the full catalog.
    ///
    /// Overlapping searches resolve last-called-wins: each call bumps the
    /// search epoch and a completion whose epoch is stale applies nothing.
    ///
    /// Fire-and-forget; the returned handle exists so tests and schedulers
    /// can await the completion.
    pub fn search_places(&self, query: &str, category: Option<&str>) -> JoinHandle<()> {
        let epoch = {
            let mut state = self.state.write().unwrap();
            state.search_epoch += 1;
            state.is_loading = true;
            state.search_epoch
        };
        let _ = self.events.send(StoreEvent::SearchStarted);
        debug!(query, ?category, epoch, "Search scheduled");

        let query = query.to_owned();
        let category = category.map(str::to_owned);
        let catalog = Arc::clone(&self.catalog);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let delay = self.search_delay;

        tokio::spawn(async move {
            // Simulated backend latency
            tokio::time::sleep(delay).await;

            let filtered = filter_places(&catalog, &query, category.as_deref());
            let count = filtered.len();

            {
                let mut state = state.write().unwrap();
                if state.search_epoch != epoch {
                    // A newer search owns the loading flag now
                    debug!(epoch, "Search superseded, discarding result");
                    return;
                }
                state.places = filtered;
                state.is_loading = false;
            }

            let _ = events.send(StoreEvent::SearchCompleted { count });
        })
    }

    /// Toggle a place in or out of the favorites
    ///
    /// The id is resolved against the full catalog; an unknown id is a
    /// no-op. The updated id list is persisted fire-and-forget: a save
    /// failure is logged and the in-memory favorites stay usable.
    pub fn toggle_favorite(&self, place_id: &PlaceId) {
        if !self.catalog.iter().any(|p| &p.id == place_id) {
            debug!(%place_id, "Ignoring favorite toggle for unknown place");
            return;
        }

        let (ids, added) = {
            let mut state = self.state.write().unwrap();
            let added = match state.favorites.iter().position(|id| id == place_id) {
                Some(pos) => {
                    state.favorites.remove(pos);
                    false
                }
                None => {
                    state.favorites.push(place_id.clone());
                    true
                }
            };
            (state.favorites.clone(), added)
        };

        let event = if added {
            StoreEvent::FavoriteAdded {
                place_id: place_id.clone(),
            }
        } else {
            StoreEvent::FavoriteRemoved {
                place_id: place_id.clone(),
            }
        };
        let _ = self.events.send(event);

        let storage = Arc::clone(&self.storage);
        tokio::spawn(async move {
            if let Err(e) = storage.save(&ids).await {
                warn!("Failed to save favorites: {e}");
            }
        });
    }

    /// Whether the place is currently favorited
    pub fn is_favorite(&self, place_id: &PlaceId) -> bool {
        self.state
            .read()
            .unwrap()
            .favorites
            .iter()
            .any(|id| id == place_id)
    }

    /// Snapshot of the currently displayed places
    pub fn places(&self) -> Vec<Place> {
        self.state.read().unwrap().places.clone()
    }

    /// Snapshot of the favorited places, in toggle order
    pub fn favorites(&self) -> Vec<Place> {
        let state = self.state.read().unwrap();
        state
            .favorites
            .iter()
            .filter_map(|id| self.catalog.iter().find(|p| &p.id == id))
            .cloned()
            .collect()
    }

    /// Whether a search is pending
    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap().is_loading
    }

    /// Look up a place by id in the full catalog
    ///
    /// Resolves against the catalog so detail views stay reachable while a
    /// filter hides the place.
    pub fn place_by_id(&self, place_id: &PlaceId) -> Option<Place> {
        self.catalog.iter().find(|p| &p.id == place_id).cloned()
    }

    /// The full immutable catalog
    pub fn catalog(&self) -> &[Place] {
        &self.catalog
    }

    /// Subscribe to store events
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

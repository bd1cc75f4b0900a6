//! Store integration tests
//!
//! Exercise the places store end-to-end over the real fixture catalog:
//! search semantics, loading flag, superseded searches, favorites, and the
//! persistence collaborator.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use wander_core::{FavoritesStorage, PlaceId, Result, WanderError};
use wander_store::{PlacesStore, StoreEvent};
use wander_storage::{MemoryFavoritesStorage, NoopFavoritesStorage};

/// Short delay so tests stay fast while still observing the pending state
const TEST_DELAY: Duration = Duration::from_millis(50);

async fn create_test_store() -> PlacesStore {
    PlacesStore::new(
        wander_fixtures::places().to_vec(),
        Arc::new(NoopFavoritesStorage::new()),
    )
    .await
    .with_search_delay(TEST_DELAY)
}

fn ids(places: &[wander_core::Place]) -> Vec<&str> {
    places.iter().map(|p| p.id.as_str()).collect()
}

/// Storage double whose load and save always fail
struct FailingStorage;

#[async_trait]
impl FavoritesStorage for FailingStorage {
    async fn load(&self) -> Result<Vec<PlaceId>> {
        Err(WanderError::storage("disk on fire"))
    }

    async fn save(&self, _ids: &[PlaceId]) -> Result<()> {
        Err(WanderError::storage("disk on fire"))
    }
}

#[tokio::test]
async fn initial_state_shows_full_catalog() {
    let store = create_test_store().await;

    assert_eq!(store.places().len(), 6);
    assert!(store.favorites().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn search_by_name_yields_single_match() {
    let store = create_test_store().await;

    store.search_places("鼎泰豐", None).await.unwrap();

    assert_eq!(ids(&store.places()), vec!["1"]);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let store = create_test_store().await;

    store.search_places("w hotel", None).await.unwrap();

    assert_eq!(ids(&store.places()), vec!["5"]);
}

#[tokio::test]
async fn category_filter_matches_exactly() {
    let store = create_test_store().await;

    store.search_places("", Some("cafe")).await.unwrap();

    assert_eq!(ids(&store.places()), vec!["2"]);
}

#[tokio::test]
async fn query_and_category_combine_in_catalog_order() {
    let store = create_test_store().await;

    // Both attractions match "台北" through name or address
    store.search_places("台北", Some("attraction")).await.unwrap();

    assert_eq!(ids(&store.places()), vec!["3", "6"]);
}

#[tokio::test]
async fn empty_search_restores_full_catalog() {
    let store = create_test_store().await;

    store.search_places("鼎泰豐", None).await.unwrap();
    assert_eq!(store.places().len(), 1);

    store.search_places("", None).await.unwrap();
    assert_eq!(store.places().len(), 6);
}

#[tokio::test]
async fn loading_flag_tracks_the_pending_interval() {
    let store = create_test_store().await;

    let search = store.search_places("鼎泰豐", None);
    assert!(store.is_loading(), "loading must be observable synchronously");

    search.await.unwrap();
    assert!(!store.is_loading());
}

#[tokio::test]
async fn later_search_supersedes_pending_one() {
    let store = create_test_store().await;

    let first = store.search_places("鼎泰豐", None);
    let second = store.search_places("", Some("cafe"));

    first.await.unwrap();
    second.await.unwrap();

    // Last call wins regardless of completion order
    assert_eq!(ids(&store.places()), vec!["2"]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn superseded_search_emits_no_completion() {
    let store = create_test_store().await;
    let mut events = store.subscribe();

    let first = store.search_places("鼎泰豐", None);
    let second = store.search_places("", Some("cafe"));
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(events.recv().await.unwrap(), StoreEvent::SearchStarted);
    assert_eq!(events.recv().await.unwrap(), StoreEvent::SearchStarted);
    assert_eq!(
        events.recv().await.unwrap(),
        StoreEvent::SearchCompleted { count: 1 }
    );

    // Nothing else: the first search's completion was discarded
    let extra = timeout(Duration::from_millis(100), events.recv()).await;
    assert!(extra.is_err(), "unexpected extra event: {extra:?}");
}

#[tokio::test]
async fn toggle_favorite_is_its_own_inverse() {
    let store = create_test_store().await;
    let id = PlaceId::new("1");

    store.toggle_favorite(&id);
    assert!(store.is_favorite(&id));
    assert_eq!(ids(&store.favorites()), vec!["1"]);

    store.toggle_favorite(&id);
    assert!(!store.is_favorite(&id));
    assert!(store.favorites().is_empty());
}

#[tokio::test]
async fn toggle_unknown_id_is_a_noop() {
    let store = create_test_store().await;

    store.toggle_favorite(&PlaceId::new("999"));

    assert!(store.favorites().is_empty());
    assert!(!store.is_favorite(&PlaceId::new("999")));
}

#[tokio::test]
async fn favorites_keep_toggle_order() {
    let store = create_test_store().await;

    store.toggle_favorite(&PlaceId::new("3"));
    store.toggle_favorite(&PlaceId::new("1"));

    assert_eq!(ids(&store.favorites()), vec!["3", "1"]);
}

#[tokio::test]
async fn favorites_work_while_filter_hides_the_place() {
    let store = create_test_store().await;

    // Narrow the displayed list to cafes, then favorite a restaurant
    store.search_places("", Some("cafe")).await.unwrap();
    assert_eq!(ids(&store.places()), vec!["2"]);

    let hidden = PlaceId::new("1");
    store.toggle_favorite(&hidden);

    assert!(store.is_favorite(&hidden));
    assert_eq!(store.favorites()[0].name, "鼎泰豐");
    assert_eq!(store.place_by_id(&hidden).unwrap().name, "鼎泰豐");
}

#[tokio::test]
async fn favorite_toggle_applies_while_search_pending() {
    let store = create_test_store().await;

    let search = store.search_places("鼎泰豐", None);
    store.toggle_favorite(&PlaceId::new("2"));

    // Toggle is independent of the loading flag
    assert!(store.is_favorite(&PlaceId::new("2")));

    search.await.unwrap();
    assert!(store.is_favorite(&PlaceId::new("2")));
}

#[tokio::test]
async fn favorites_hydrate_from_storage() {
    let storage = Arc::new(MemoryFavoritesStorage::seeded(vec![
        PlaceId::new("2"),
        PlaceId::new("999"), // no longer in the catalog, dropped
    ]));
    let store = PlacesStore::new(wander_fixtures::places().to_vec(), storage).await;

    assert_eq!(ids(&store.favorites()), vec!["2"]);
    assert!(store.is_favorite(&PlaceId::new("2")));
    assert!(!store.is_favorite(&PlaceId::new("999")));
}

#[tokio::test]
async fn toggles_persist_through_the_collaborator() {
    let storage: Arc<dyn FavoritesStorage> = Arc::new(MemoryFavoritesStorage::new());
    let store = PlacesStore::new(wander_fixtures::places().to_vec(), Arc::clone(&storage)).await;

    store.toggle_favorite(&PlaceId::new("1"));

    // The save runs on a detached task; poll until it lands
    let mut saved = Vec::new();
    for _ in 0..100 {
        saved = storage.load().await.unwrap();
        if !saved.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(saved, vec![PlaceId::new("1")]);
}

#[tokio::test]
async fn storage_failures_never_disturb_the_store() {
    let store = PlacesStore::new(
        wander_fixtures::places().to_vec(),
        Arc::new(FailingStorage),
    )
    .await
    .with_search_delay(TEST_DELAY);

    // Load failed: favorites start empty
    assert!(store.favorites().is_empty());

    // Save fails too, but in-memory favorites keep working
    store.toggle_favorite(&PlaceId::new("1"));
    assert!(store.is_favorite(&PlaceId::new("1")));

    store.search_places("", Some("cafe")).await.unwrap();
    assert_eq!(ids(&store.places()), vec!["2"]);
}

#[tokio::test]
async fn favorite_events_are_emitted() {
    let store = create_test_store().await;
    let mut events = store.subscribe();
    let id = PlaceId::new("4");

    store.toggle_favorite(&id);
    store.toggle_favorite(&id);

    assert_eq!(
        events.recv().await.unwrap(),
        StoreEvent::FavoriteAdded {
            place_id: id.clone()
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        StoreEvent::FavoriteRemoved { place_id: id }
    );
}

//! Wander Fixtures
//!
//! The static catalog backing the app: the embedded place list and the
//! category list used by the filter chips.
//!
//! The place catalog is compiled into the binary as a JSON asset and parsed
//! once on first access. It is the only data source; the app has no network
//! layer, so every store operation resolves against this catalog.
//!
//! # Example
//!
//! ```rust
//! let places = wander_fixtures::places();
//! assert!(!places.is_empty());
//!
//! let categories = wander_fixtures::categories();
//! assert!(categories.iter().any(|c| c.id == "restaurant"));
//! ```

use std::sync::OnceLock;
use tracing::error;
use wander_core::{Category, Place, Result};

/// Embedded place catalog asset
static PLACES_JSON: &str = include_str!("../data/places.json");

static PLACES: OnceLock<Vec<Place>> = OnceLock::new();
static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();

/// Parse the embedded place catalog
///
/// Prefer [`places`] unless an explicit error path is needed; the asset is
/// compiled in and covered by tests, so parsing does not fail in practice.
pub fn load_places() -> Result<Vec<Place>> {
    Ok(serde_json::from_str(PLACES_JSON)?)
}

/// Get the place catalog
///
/// Parsed once on first access. If the embedded asset is somehow invalid the
/// catalog is empty and an error is logged; consumers never see a parse
/// failure.
pub fn places() -> &'static [Place] {
    PLACES.get_or_init(|| match load_places() {
        Ok(places) => places,
        Err(e) => {
            error!("Failed to parse embedded place catalog: {e}");
            Vec::new()
        }
    })
}

/// Get the category list, in display order
pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(|| {
        vec![
            Category::new("restaurant", "餐廳"),
            Category::new("cafe", "咖啡廳"),
            Category::new("attraction", "景點"),
            Category::new("shopping", "購物"),
            Category::new("hotel", "住宿"),
            Category::new("bar", "酒吧"),
            Category::new("park", "公園"),
            Category::new("museum", "博物館"),
        ]
    })
}

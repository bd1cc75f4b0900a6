//! Place filtering
//!
//! Pure predicate matching over the place catalog. A place survives when:
//! - the query (if non-empty) is a case-insensitive substring of its name
//!   or address, and
//! - the category (if set) equals its category field exactly.
//!
//! Catalog order is preserved. The presentation layer also uses this for
//! client-side refinement between debounced searches.

use wander_core::Place;

/// Filter the catalog by query and category
pub fn filter_places(catalog: &[Place], query: &str, category: Option<&str>) -> Vec<Place> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|place| query.is_empty() || matches_query(place, &needle))
        .filter(|place| match category {
            Some(c) => place.category == c,
            None => true,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match on name or address
///
/// `needle` must already be lowercased.
fn matches_query(place: &Place, needle: &str) -> bool {
    place.name.to_lowercase().contains(needle) || place.address.to_lowercase().contains(needle)
}

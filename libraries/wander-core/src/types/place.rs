/// Place domain type
use crate::types::{PlaceId, Reviews};
use serde::{Deserialize, Serialize};

/// Point-of-interest record with descriptive, rating, and review data
///
/// Field names serialize in camelCase to match the catalog asset shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique place identifier
    pub id: PlaceId,

    /// Display name
    pub name: String,

    /// Category key (e.g. "restaurant", "cafe")
    pub category: String,

    /// Average rating, 0.0-5.0
    pub rating: f64,

    /// Total number of reviews
    pub review_count: u32,

    /// Tiered price marker ("$" through "$$$$$")
    pub price_level: String,

    /// Street address
    pub address: String,

    /// Phone number; may be empty
    pub phone: String,

    /// Website URL; may be empty
    pub website: String,

    /// Opening hours display string; may be empty
    pub hours: String,

    /// Whether the place is currently open
    pub is_open: bool,

    /// Distance display string (not a computed value)
    pub distance: String,

    /// Image URLs; detail views assume index 0 exists
    pub images: Vec<String>,

    /// Geographic coordinates
    pub coordinates: Coordinates,

    /// Latest and worst reviews
    pub reviews: Reviews,
}

impl Place {
    /// Create a new place with minimal data
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: PlaceId::generate(),
            name: name.into(),
            category: category.into(),
            rating: 0.0,
            review_count: 0,
            price_level: String::new(),
            address: address.into(),
            phone: String::new(),
            website: String::new(),
            hours: String::new(),
            is_open: false,
            distance: String::new(),
            images: Vec::new(),
            coordinates: Coordinates::default(),
            reviews: Reviews::default(),
        }
    }
}

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,

    /// Longitude
    pub lng: f64,
}

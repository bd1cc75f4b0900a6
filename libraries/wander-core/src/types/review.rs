/// Review domain types
use serde::{Deserialize, Serialize};

/// A single user review attached to a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review author display name
    pub author: String,

    /// Star rating, 0-5
    pub rating: u8,

    /// Free-form review text
    pub text: String,

    /// Display date string (not a parsed date)
    pub date: String,
}

/// Reviews shown on a place detail view, split into two ordered lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reviews {
    /// Most recent reviews, newest first
    pub latest: Vec<Review>,

    /// Lowest-rated reviews; may be empty
    pub worst: Vec<Review>,
}

/// Category domain type
use serde::{Deserialize, Serialize};

/// A browsing category used by the filter chips
///
/// Icon bindings live in the presentation layer; the domain carries only the
/// filter key and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Filter key matched exactly against `Place::category`
    pub id: String,

    /// Display name
    pub name: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

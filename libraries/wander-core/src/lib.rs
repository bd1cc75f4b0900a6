//! Wander Core
//!
//! Platform-agnostic core types, traits, and error handling for Wander.
//!
//! This crate provides the foundational building blocks shared by the
//! fixture catalog, the places store, and the favorites storage backends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Place`, `Review`, `Category`, etc.
//! - **Core Traits**: `FavoritesStorage`
//! - **Error Handling**: Unified `WanderError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use wander_core::types::{Place, PlaceId};
//!
//! // Create a place with minimal data
//! let place = Place::new("鼎泰豐", "restaurant", "台北市大安區信義路二段194號");
//!
//! // IDs are plain strings under the hood
//! let id = PlaceId::new("1");
//! assert_eq!(id.as_str(), "1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WanderError};
pub use storage::FavoritesStorage;
pub use types::{Category, Coordinates, Place, PlaceId, Review, Reviews};

//! Wander Storage
//!
//! Favorites persistence backends behind the `wander-core`
//! `FavoritesStorage` trait.
//!
//! Durable persistence is out of scope for now, so two process-lifetime
//! backends are provided:
//! - [`NoopFavoritesStorage`] - loads nothing, discards saves (the default)
//! - [`MemoryFavoritesStorage`] - keeps the id list in memory; used by tests
//!   and anywhere a working backend is needed within one process
//!
//! A durable backend slots in by implementing the same trait; the store
//! never needs to change.

mod error;
mod memory;
mod noop;

pub use error::StorageError;
pub use memory::MemoryFavoritesStorage;
pub use noop::NoopFavoritesStorage;

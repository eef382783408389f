//! Storage layer for recipes.
//!
//! Provides the [`RecipeStore`] trait defining the storage contract, and
//! [`InMemoryStore`], the backend that holds the whole collection in process
//! memory.
//!
//! The store itself is a plain single-owner value: mutating methods take
//! `&mut self` and reading methods take `&self`. Callers that share a store
//! between tasks put it behind a reader/writer lock, which makes every
//! operation atomic with respect to every other.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: RecipeStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`source`]: IdSource and Clock, the store's downward collaborators
//! - [`seed`]: seed file loading

pub mod error;
pub mod memory;
pub mod seed;
pub mod source;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use seed::{load_seed_file, try_load_seed_file, SeedRecipe};
pub use source::{Clock, FixedClock, IdSource, SequentialIdSource, SystemClock, UuidIdSource};
pub use traits::RecipeStore;

//! Pokedex - A command-line catalog browser
//!
//! Pages through location areas, explores them and records caught Pokemon.
//! Catalog responses are memoized in a time-bounded in-memory cache whose
//! background reaper removes entries older than the cache interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::CatalogClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;

//! API Module
//!
//! Catalog fetch layer. Every request goes through the response cache,
//! keyed by the full request URL.
//!
//! # Endpoints read
//! - `GET {base}/location-area/` - Paged list of location areas
//! - `GET {base}/location-area/{name}` - Encounters in one area
//! - `GET {base}/pokemon/{name}` - One Pokemon

pub mod client;

pub use client::CatalogClient;

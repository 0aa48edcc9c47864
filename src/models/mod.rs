//! Catalog record models
//!
//! Serde shapes for the catalog API responses the Pokedex reads. Unknown
//! fields are ignored so the records track only what the commands print.

pub mod location;
pub mod pokemon;

pub use location::{LocationArea, LocationPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::{Deserialize, Serialize};

/// A `{name, url}` reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

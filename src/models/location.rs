//! Location area records

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of the location-area listing.
///
/// `next` and `previous` are absolute URLs, `None` at either end of the list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

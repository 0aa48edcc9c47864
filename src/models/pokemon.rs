//! Pokemon records

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A catchable catalog entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Drives the catch roll; null for a few catalog records
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Probability in `[0, 1]` that a single throw catches this Pokemon.
    ///
    /// Falls linearly with base experience, reaching zero at 1000.
    pub fn catch_rate(&self) -> f64 {
        let experience = f64::from(self.base_experience.unwrap_or(0));
        (1.0 - experience / 1000.0).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

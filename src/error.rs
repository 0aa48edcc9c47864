//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. Cache operations are
//! total and never produce these; only construction, the fetch layer and
//! command dispatch do.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache interval was zero
    #[error("cache interval must be greater than zero")]
    InvalidInterval,

    /// Transport-level HTTP failure
    #[error("failed to send request: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with something other than 200 OK
    #[error("failed to get response: {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Command was issued without its argument
    #[error("please provide a {0}")]
    MissingArgument(&'static str),

    /// Command was issued with more than one argument
    #[error("too many arguments, please provide only one {0}")]
    TooManyArguments(&'static str),

    /// Inspected a record that was never caught
    #[error("{0} not found in your Pokedex")]
    NotCaught(String),

    /// Reading commands or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

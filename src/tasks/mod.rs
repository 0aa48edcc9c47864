//! Background Tasks Module
//!
//! Contains background tasks that run alongside foreground request handling.
//!
//! # Tasks
//! - Reaper: sweeps expired cache entries once per cache interval

mod reaper;

pub use reaper::spawn_reaper;

//! Shared types for dogstats.
//!
//! Holds the registration record model, the error enum, CLI settings and the
//! formatting rules used by every report line.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, StatsError};

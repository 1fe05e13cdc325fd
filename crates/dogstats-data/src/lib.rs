//! Data layer for dogstats.
//!
//! Loads the registration CSV, normalizes it into a sorted [`table::Table`],
//! applies the minimum-count filter and answers per-breed queries.

pub mod analysis;
pub mod filter;
pub mod query;
pub mod reader;
pub mod table;

pub use dogstats_core as core;

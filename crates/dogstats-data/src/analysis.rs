//! Report pipeline for a single breed.
//!
//! Loads and prepares the table once, then runs every query for a breed and
//! collects the results into a [`BreedReport`] for the presenter.

use std::path::Path;

use dogstats_core::error::{Result, StatsError};
use dogstats_core::models::{BreedReport, YearShare};
use tracing::info;

use crate::filter::filter_min_total;
use crate::query::{
    distinct_years, most_popular_months, overall_percent, total_registrations, yearly_percent,
};
use crate::reader::load_records;
use crate::table::{BreedSlice, Table};

/// Load `path`, normalize it, and drop rows at or below `threshold`.
///
/// An empty result is an error: no breed could ever be found in it.
pub fn prepare_table(path: &Path, threshold: u64) -> Result<Table> {
    let raw = load_records(path)?;
    let raw_count = raw.len();

    let table = filter_min_total(&Table::normalize(raw), threshold);
    if table.is_empty() {
        return Err(StatsError::EmptyDataset {
            path: path.to_path_buf(),
            threshold,
        });
    }

    info!(
        "Loaded {} rows ({} after filtering, {} breeds) from {}",
        raw_count,
        table.len(),
        table.breeds().count(),
        path.display()
    );

    Ok(table)
}

/// Compute every statistic for `slice`, reporting a yearly share for each of
/// `years` in the order given.
pub fn analyze_breed(table: &Table, slice: &BreedSlice<'_>, years: &[i32]) -> BreedReport {
    let yearly = years
        .iter()
        .map(|&year| YearShare {
            year,
            percent: yearly_percent(table, slice, year),
        })
        .collect();

    BreedReport {
        breed: slice.breed.to_string(),
        years: distinct_years(slice),
        total: total_registrations(slice),
        yearly,
        overall: overall_percent(table, slice),
        popular_months: most_popular_months(slice),
    }
}

//! Per-breed statistics over a normalized, filtered [`Table`].

use std::collections::HashMap;

use dogstats_core::error::{Result, StatsError};
use dogstats_core::formatting::share_of;
use dogstats_core::models::Percent;

use crate::table::{BreedSlice, Table};

/// Fetch all rows for `name`.
///
/// `name` must already be normalized (see
/// [`crate::table::normalize_breed_name`]). An unknown breed is a
/// [`StatsError::BreedNotFound`], which callers may recover from.
pub fn lookup_breed<'a>(table: &'a Table, name: &str) -> Result<BreedSlice<'a>> {
    table
        .slice(name)
        .ok_or_else(|| StatsError::BreedNotFound(name.to_string()))
}

/// Sum of the breed's registrations.
pub fn total_registrations(slice: &BreedSlice<'_>) -> u64 {
    slice.records.iter().map(|r| r.total).sum()
}

/// The breed's share of every registration in `year`.
///
/// A year with no registrations at all yields [`Percent::NotInList`] rather
/// than 0%.
pub fn yearly_percent(table: &Table, slice: &BreedSlice<'_>, year: i32) -> Percent {
    let breed_in_year: u64 = slice
        .records
        .iter()
        .filter(|r| r.year == year)
        .map(|r| r.total)
        .sum();

    match share_of(breed_in_year, table.year_total(year)) {
        Some(p) => Percent::Share(p),
        None => Percent::NotInList,
    }
}

/// The breed's share of the whole table.
pub fn overall_percent(table: &Table, slice: &BreedSlice<'_>) -> Percent {
    let part = total_registrations(slice) as f64;
    Percent::Share(part / table.grand_total() as f64 * 100.0)
}

/// Unique years in first-seen order. The slice is sorted, so this is ascending.
pub fn distinct_years(slice: &BreedSlice<'_>) -> Vec<i32> {
    let mut years: Vec<i32> = Vec::new();
    for record in slice.records {
        if !years.contains(&record.year) {
            years.push(record.year);
        }
    }
    years
}

/// Month(s) appearing in the most rows, alphabetical.
///
/// Counts rows per month rather than registrations. Every month tied at the
/// maximum is returned.
pub fn most_popular_months(slice: &BreedSlice<'_>) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in slice.records {
        *counts.entry(record.month.as_str()).or_default() += 1;
    }

    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };

    let mut months: Vec<String> = counts
        .into_iter()
        .filter(|(_, n)| *n == max)
        .map(|(m, _)| m.to_string())
        .collect();
    months.sort();
    months
}

// ── Tests ─────────────────────────────────────────────────────────────────────

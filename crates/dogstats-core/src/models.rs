use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the registration table: how many dogs of `breed` were
/// registered in `month` of `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Breed name. Upper-cased and trimmed once the table is normalized.
    #[serde(rename = "Breed")]
    pub breed: String,
    /// Registration year.
    #[serde(rename = "Year")]
    pub year: i32,
    /// Month label exactly as it appears in the source (e.g. `"January"`).
    #[serde(rename = "Month")]
    pub month: String,
    /// Number of registrations.
    #[serde(rename = "Total")]
    pub total: u64,
}

impl Record {
    pub fn new(breed: impl Into<String>, year: i32, month: impl Into<String>, total: u64) -> Self {
        Record {
            breed: breed.into(),
            year,
            month: month.into(),
            total,
        }
    }
}

/// A breed's share of registrations.
///
/// `NotInList` means there was nothing to compare against (the year had no
/// registrations at all), which is not the same thing as a 0% share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Percent {
    Share(f64),
    NotInList,
}

impl Percent {
    /// The numeric share, if one exists.
    pub fn value(&self) -> Option<f64> {
        match self {
            Percent::Share(v) => Some(*v),
            Percent::NotInList => None,
        }
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percent::Share(v) => write!(f, "{}", crate::formatting::format_percent(*v)),
            Percent::NotInList => write!(f, "not in the list"),
        }
    }
}

/// Share of one breed within a single year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearShare {
    pub year: i32,
    pub percent: Percent,
}

/// Everything reported for one breed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedReport {
    /// Normalized breed name.
    pub breed: String,
    /// Years the breed appears in, ascending.
    pub years: Vec<i32>,
    /// Sum of all the breed's registrations.
    pub total: u64,
    /// Share per configured year, in configuration order.
    pub yearly: Vec<YearShare>,
    /// Share across the whole table.
    pub overall: Percent,
    /// Month(s) the breed appears in most often, alphabetical.
    pub popular_months: Vec<String>,
}

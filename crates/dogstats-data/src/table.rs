//! The normalized registration table.
//!
//! Records are kept in one vector sorted by `(breed, year, month)` with a side
//! index from breed to its contiguous range, so finding a breed is one map lookup
//! plus a slice borrow.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use dogstats_core::models::Record;

// ── BreedSlice ────────────────────────────────────────────────────────────────

/// All rows of one breed, borrowed from a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreedSlice<'a> {
    pub breed: &'a str,
    pub records: &'a [Record],
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Sorted, de-duplicated registration records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    records: Vec<Record>,
    breed_index: BTreeMap<String, Range<usize>>,
    year_totals: HashMap<i32, u64>,
    grand_total: u64,
}

impl Table {
    /// Normalize raw rows into a table.
    ///
    /// Breed names are trimmed and upper-cased. Rows sharing a
    /// `(breed, year, month)` key collapse to the last one read.
    pub fn normalize(raw: impl IntoIterator<Item = Record>) -> Self {
        let mut keyed: BTreeMap<(String, i32, String), u64> = BTreeMap::new();
        for record in raw {
            let breed = normalize_breed_name(&record.breed);
            keyed.insert((breed, record.year, record.month), record.total);
        }

        let records = keyed
            .into_iter()
            .map(|((breed, year, month), total)| Record {
                breed,
                year,
                month,
                total,
            })
            .collect();

        Self::from_sorted(records)
    }

    /// Build the table around records that are already normalized and sorted.
    ///
    /// Used after operations that preserve order, such as filtering.
    pub(crate) fn from_sorted(records: Vec<Record>) -> Self {
        let mut breed_index: BTreeMap<String, Range<usize>> = BTreeMap::new();
        let mut year_totals: HashMap<i32, u64> = HashMap::new();
        let mut grand_total = 0u64;

        for (i, record) in records.iter().enumerate() {
            breed_index
                .entry(record.breed.clone())
                .and_modify(|range| range.end = i + 1)
                .or_insert(i..i + 1);
            *year_totals.entry(record.year).or_default() += record.total;
            grand_total += record.total;
        }

        Table {
            records,
            breed_index,
            year_totals,
            grand_total,
        }
    }

    /// All records in key order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the table, yielding its records in key order.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct breed names, alphabetical.
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.breed_index.keys().map(String::as_str)
    }

    /// The rows for `breed`, which must already be normalized.
    pub fn slice(&self, breed: &str) -> Option<BreedSlice<'_>> {
        let (name, range) = self.breed_index.get_key_value(breed)?;
        Some(BreedSlice {
            breed: name.as_str(),
            records: &self.records[range.clone()],
        })
    }

    /// Sum of totals over every breed in `year`; zero when the year is absent.
    pub fn year_total(&self, year: i32) -> u64 {
        self.year_totals.get(&year).copied().unwrap_or(0)
    }

    /// Sum of totals over the whole table.
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }
}

/// Trim and upper-case a breed name. Applied to stored names and user input
/// alike so the two compare equal.
pub fn normalize_breed_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_rows() -> Vec<Record> {
        vec![
            Record::new("  poodle ", 2021, "JAN", 50),
            Record::new("Labrador", 2022, "FEB", 30),
            Record::new("labrador", 2021, "JAN", 25),
            Record::new("LABRADOR ", 2021, "JAN", 25),
        ]
    }

    // ── normalize ─────────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_uppercases_and_trims() {
        let table = Table::normalize(raw_rows());
        let breeds: Vec<&str> = table.breeds().collect();
        assert_eq!(breeds, vec!["LABRADOR", "POODLE"]);
    }

    #[test]
    fn test_normalize_sorts_by_composite_key() {
        let table = Table::normalize(raw_rows());
        let keys: Vec<(&str, i32, &str)> = table
            .records()
            .iter()
            .map(|r| (r.breed.as_str(), r.year, r.month.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("LABRADOR", 2021, "JAN"),
                ("LABRADOR", 2022, "FEB"),
                ("POODLE", 2021, "JAN"),
            ]
        );
    }

    #[test]
    fn test_normalize_collapses_duplicate_keys_last_wins() {
        let table = Table::normalize(vec![
            Record::new("PUG", 2021, "MAY", 21),
            Record::new("pug", 2021, "MAY", 99),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].total, 99);
    }

    #[test]
    fn test_normalize_keeps_month_order_alphabetical() {
        let table = Table::normalize(vec![
            Record::new("PUG", 2021, "March", 30),
            Record::new("PUG", 2021, "April", 30),
            Record::new("PUG", 2021, "January", 30),
        ]);
        let months: Vec<&str> = table.records().iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["April", "January", "March"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = Table::normalize(raw_rows());
        let twice = Table::normalize(once.clone().into_records());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_empty() {
        let table = Table::normalize(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.grand_total(), 0);
        assert_eq!(table.breeds().count(), 0);
    }

    // ── index ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_slice_returns_contiguous_breed_rows() {
        let table = Table::normalize(raw_rows());
        let slice = table.slice("LABRADOR").unwrap();
        assert_eq!(slice.breed, "LABRADOR");
        assert_eq!(slice.records.len(), 2);
        assert!(slice.records.iter().all(|r| r.breed == "LABRADOR"));
    }

    #[test]
    fn test_slice_requires_normalized_name() {
        let table = Table::normalize(raw_rows());
        assert!(table.slice("labrador").is_none());
        assert!(table.slice("BEAGLE").is_none());
    }

    #[test]
    fn test_year_and_grand_totals() {
        let table = Table::normalize(raw_rows());
        assert_eq!(table.year_total(2021), 75);
        assert_eq!(table.year_total(2022), 30);
        assert_eq!(table.year_total(2023), 0);
        assert_eq!(table.grand_total(), 105);
    }

    #[test]
    fn test_normalize_breed_name() {
        assert_eq!(normalize_breed_name("  Golden Retriever "), "GOLDEN RETRIEVER");
        assert_eq!(normalize_breed_name("PUG"), "PUG");
    }
}

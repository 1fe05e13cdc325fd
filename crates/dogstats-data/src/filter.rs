//! Minimum-count filter applied before any query.

use tracing::debug;

use crate::table::Table;

/// Keep only records whose total is strictly greater than `threshold`.
///
/// Order is preserved, so the result is still a valid normalized table.
pub fn filter_min_total(table: &Table, threshold: u64) -> Table {
    let kept: Vec<_> = table
        .records()
        .iter()
        .filter(|r| r.total > threshold)
        .cloned()
        .collect();

    debug!(
        "Filter > {}: kept {} of {} rows",
        threshold,
        kept.len(),
        table.len()
    );

    Table::from_sorted(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogstats_core::models::Record;

    fn table() -> Table {
        Table::normalize(vec![
            Record::new("LABRADOR", 2021, "JAN", 25),
            Record::new("LABRADOR", 2021, "FEB", 20),
            Record::new("LABRADOR", 2022, "FEB", 30),
            Record::new("POODLE", 2021, "JAN", 50),
            Record::new("PUG", 2023, "MAR", 3),
        ])
    }

    #[test]
    fn test_filter_drops_rows_at_or_below_threshold() {
        let filtered = filter_min_total(&table(), 20);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.records().iter().all(|r| r.total > 20));
    }

    #[test]
    fn test_filter_removes_breeds_with_no_rows_left() {
        let filtered = filter_min_total(&table(), 20);
        assert!(filtered.slice("PUG").is_none());
        assert!(filtered.slice("LABRADOR").is_some());
    }

    #[test]
    fn test_filter_recomputes_totals() {
        let filtered = filter_min_total(&table(), 20);
        assert_eq!(filtered.grand_total(), 105);
        assert_eq!(filtered.year_total(2021), 75);
        assert_eq!(filtered.year_total(2023), 0);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_min_total(&table(), 20);
        let twice = filter_min_total(&once, 20);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_zero_threshold_keeps_positive_rows() {
        let filtered = filter_min_total(&table(), 0);
        assert_eq!(filtered.len(), 5);
    }
}

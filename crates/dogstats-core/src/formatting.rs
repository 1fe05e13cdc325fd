/// Number of digits printed after the decimal point for every percentage.
pub const PERCENT_DECIMALS: usize = 6;

/// Format a percentage value with exactly six decimals and a trailing `%`.
///
/// # Examples
///
/// ```
/// use dogstats_core::formatting::format_percent;
///
/// assert_eq!(format_percent(52.38095238095238), "52.380952%");
/// assert_eq!(format_percent(100.0), "100.000000%");
/// assert_eq!(format_percent(0.0), "0.000000%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.prec$}%", value, prec = PERCENT_DECIMALS)
}

/// Calculate `(part / whole) * 100` without rounding.
///
/// Returns `None` when `whole` is zero, leaving the caller to decide what an
/// empty denominator means.
///
/// # Examples
///
/// ```
/// use dogstats_core::formatting::share_of;
///
/// assert_eq!(share_of(50, 200), Some(25.0));
/// assert_eq!(share_of(3, 0), None);
/// ```
pub fn share_of(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}

/// Render years the way the report line lists them: each year followed by a
/// single space.
///
/// # Examples
///
/// ```
/// use dogstats_core::formatting::format_year_list;
///
/// assert_eq!(format_year_list(&[2021, 2022]), "2021 2022 ");
/// assert_eq!(format_year_list(&[]), "");
/// ```
pub fn format_year_list(years: &[i32]) -> String {
    years.iter().map(|y| format!("{} ", y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_rounds_to_six_places() {
        assert_eq!(format_percent(1.0 / 3.0 * 100.0), "33.333333%");
        assert_eq!(format_percent(2.0 / 3.0 * 100.0), "66.666667%");
    }

    #[test]
    fn test_share_of_full_and_none() {
        assert_eq!(share_of(7, 7), Some(100.0));
        assert_eq!(share_of(0, 7), Some(0.0));
        assert_eq!(share_of(0, 0), None);
    }

    #[test]
    fn test_share_of_labrador_scenario() {
        let share = share_of(55, 105).unwrap();
        assert_eq!(format_percent(share), "52.380952%");
    }

    #[test]
    fn test_format_year_list_single() {
        assert_eq!(format_year_list(&[2023]), "2023 ");
    }
}

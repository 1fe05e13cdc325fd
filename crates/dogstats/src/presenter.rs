//! Console rendering of a [`BreedReport`].

use std::io::Write;

use dogstats_core::formatting::format_year_list;
use dogstats_core::models::BreedReport;

pub const BANNER: &str = "ENSF 692 Dogs of Calgary";

/// Write the report as the fixed sequence of text lines.
pub fn write_text_report<W: Write>(out: &mut W, report: &BreedReport) -> std::io::Result<()> {
    let breed = &report.breed;

    writeln!(
        out,
        "The {} was found in the top breeds for years:  {}",
        breed,
        format_year_list(&report.years)
    )?;
    writeln!(
        out,
        "There have been {} {} dogs registered total.",
        report.total, breed
    )?;
    for share in &report.yearly {
        writeln!(
            out,
            "The {} was {} of top breeds in {}.",
            breed, share.percent, share.year
        )?;
    }
    writeln!(
        out,
        "The {} was {} of top breeds across all years.",
        breed, report.overall
    )?;
    writeln!(
        out,
        "Most popular month(s) for {} dogs:  {}",
        breed,
        report.popular_months.join(" ")
    )?;

    Ok(())
}

/// Write the report as pretty-printed JSON followed by a newline.
pub fn write_json_report<W: Write>(out: &mut W, report: &BreedReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogstats_core::models::{Percent, YearShare};

    fn report() -> BreedReport {
        BreedReport {
            breed: "LABRADOR".to_string(),
            years: vec![2021, 2022],
            total: 55,
            yearly: vec![
                YearShare {
                    year: 2021,
                    percent: Percent::Share(100.0 / 3.0),
                },
                YearShare {
                    year: 2022,
                    percent: Percent::Share(100.0),
                },
                YearShare {
                    year: 2023,
                    percent: Percent::NotInList,
                },
            ],
            overall: Percent::Share(55.0 / 105.0 * 100.0),
            popular_months: vec!["FEB".to_string(), "JAN".to_string()],
        }
    }

    #[test]
    fn test_text_report_lines() {
        let mut out = Vec::new();
        write_text_report(&mut out, &report()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = [
            "The LABRADOR was found in the top breeds for years:  2021 2022 ",
            "There have been 55 LABRADOR dogs registered total.",
            "The LABRADOR was 33.333333% of top breeds in 2021.",
            "The LABRADOR was 100.000000% of top breeds in 2022.",
            "The LABRADOR was not in the list of top breeds in 2023.",
            "The LABRADOR was 52.380952% of top breeds across all years.",
            "Most popular month(s) for LABRADOR dogs:  FEB JAN",
        ];
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, expected);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_json_report_shape() {
        let mut out = Vec::new();
        write_json_report(&mut out, &report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["breed"], "LABRADOR");
        assert_eq!(value["total"], 55);
        assert_eq!(value["years"], serde_json::json!([2021, 2022]));
        assert!(value["yearly"][2]["percent"].is_null());
        assert_eq!(value["popular_months"], serde_json::json!(["FEB", "JAN"]));
    }
}

mod bootstrap;
mod presenter;
mod prompt;

use std::io::Write;

use anyhow::Result;
use dogstats_core::settings::{OutputFormat, Settings};
use dogstats_data::analysis::{analyze_breed, prepare_table};
use dogstats_data::query::lookup_breed;
use dogstats_data::table::normalize_breed_name;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("dogstats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data: {}, threshold: {}, years: {:?}",
        settings.data.display(),
        settings.threshold,
        settings.years
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", presenter::BANNER)?;

    let table = prepare_table(&settings.data, settings.threshold)?;

    // Breed from the command line is final; there is nobody to re-prompt.
    let slice = match &settings.breed {
        Some(name) => lookup_breed(&table, &normalize_breed_name(name))?,
        None => {
            let stdin = std::io::stdin();
            match prompt::prompt_breed(&table, &mut stdin.lock(), &mut out)? {
                Some(slice) => slice,
                None => {
                    tracing::info!("No breed entered; exiting");
                    return Ok(());
                }
            }
        }
    };

    let report = analyze_breed(&table, &slice, &settings.years);

    match settings.format {
        OutputFormat::Text => presenter::write_text_report(&mut out, &report)?,
        OutputFormat::Json => presenter::write_json_report(&mut out, &report)?,
    }

    Ok(())
}

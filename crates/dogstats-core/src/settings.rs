use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{Result, StatsError};

/// Years reported individually unless `--years` says otherwise.
pub const DEFAULT_YEARS: [i32; 3] = [2021, 2022, 2023];

/// Rows with a total at or below this count are dropped before any query.
pub const DEFAULT_THRESHOLD: u64 = 20;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// How the breed report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report lines
    Text,
    /// The report as pretty-printed JSON
    Json,
}

/// Registration statistics for the dogs of Calgary
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dogstats",
    about = "Registration statistics for the dogs of Calgary",
    version
)]
pub struct Settings {
    /// Registration table: a workbook (.xlsx, .xls, .ods) or CSV with Breed, Year, Month, Total columns
    #[arg(long, default_value = "CalgaryDogBreeds.xlsx")]
    pub data: PathBuf,

    /// Drop rows whose total is not strictly above this count
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u64,

    /// Comma-separated years to report a yearly share for
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_YEARS)]
    pub years: Vec<i32>,

    /// Breed to report on; skips the interactive prompt
    #[arg(long)]
    pub breed: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, apply `--debug`, and validate the result.
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Reject combinations clap cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        if self.years.is_empty() {
            return Err(StatsError::Config("at least one year is required".to_string()));
        }
        if self.data.as_os_str().is_empty() {
            return Err(StatsError::Config("data path is empty".to_string()));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

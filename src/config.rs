//! Runtime configuration
//!
//! Command-line flags win over environment variables, which may come from a
//! `.env` file.

use crate::puzzles::Dataset;
use crate::storage::FileStore;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::env;
use std::path::{Path, PathBuf};

pub const DATE_VAR: &str = "BANDADLE_DATE";
pub const DATA_VAR: &str = "BANDADLE_DATA";
pub const STATE_DIR_VAR: &str = "BANDADLE_STATE_DIR";

/// Log file written in TUI mode
pub const LOG_FILE: &str = "bandadle.log";

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub date: Option<String>,
    pub data: Option<PathBuf>,
    pub state_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Puzzle date to play instead of today's
    pub date: Option<String>,
    /// Dataset file replacing the bundled puzzles
    pub data_path: Option<PathBuf>,
    /// Where the session and intro flag are kept
    pub state_dir: PathBuf,
}

impl Config {
    /// Assemble configuration from flags, the process environment and `.env`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds invalid unicode.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        dotenvy::dotenv().ok();

        let date = match env::var(DATE_VAR) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(e).context(format!("{DATE_VAR} must be valid unicode")),
        };

        Ok(Self::resolve(
            overrides,
            date,
            env::var_os(DATA_VAR).map(PathBuf::from),
            env::var_os(STATE_DIR_VAR).map(PathBuf::from),
            env::var_os("HOME").map(PathBuf::from),
        ))
    }

    fn resolve(
        overrides: Overrides,
        env_date: Option<String>,
        env_data: Option<PathBuf>,
        env_state_dir: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Self {
        let state_dir = overrides
            .state_dir
            .or(env_state_dir)
            .unwrap_or_else(|| default_state_dir(home.as_deref()));

        Self {
            date: overrides
                .date
                .or(env_date)
                .map(|date| date.trim().to_string())
                .filter(|date| !date.is_empty()),
            data_path: overrides.data.or(env_data),
            state_dir,
        }
    }

    /// The configured dataset, or the bundled one
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or parsed.
    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.data_path {
            Some(path) => Dataset::load_from_file(path)
                .with_context(|| format!("Failed to load puzzles from {}", path.display())),
            None => Dataset::embedded().context("Bundled puzzle dataset is malformed"),
        }
    }

    /// Open the key-value store in the state directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::open(&self.state_dir).with_context(|| {
            format!(
                "Failed to open state directory {}",
                self.state_dir.display()
            )
        })
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILE)
    }

    /// Today's date on the local calendar
    #[must_use]
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

fn default_state_dir(home: Option<&Path>) -> PathBuf {
    home.map_or_else(
        || PathBuf::from(".bandadle"),
        |home| home.join(".local").join("state").join("bandadle"),
    )
}

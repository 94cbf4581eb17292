//! Runtime settings resolved from the environment.
//!
//! `DATA_LAKE` points at the base data directory and `DEFAULT_YEARS` holds the
//! inclusive year window (e.g. `2015-2024`). Only the CLI reads these; the
//! pipeline functions take the resolved values as parameters.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_YEARS: &str = "2015-2024";

/// Inclusive range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            bail!("Invalid year range: {} is after {}", start, end);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

impl FromStr for YearRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = match s.split_once('-') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (s, s),
        };
        let start: i32 = start
            .parse()
            .with_context(|| format!("Invalid start year in {:?}", s))?;
        let end: i32 = end
            .parse()
            .with_context(|| format!("Invalid end year in {:?}", s))?;
        YearRange::new(start, end)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub years: YearRange,
}

impl Settings {
    /// Reads `DATA_LAKE` and `DEFAULT_YEARS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("DATA_LAKE").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let years = lookup("DEFAULT_YEARS").unwrap_or_else(|| DEFAULT_YEARS.to_string());

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            years: years
                .parse()
                .with_context(|| format!("DEFAULT_YEARS={:?}", years))?,
        })
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    pub fn unesco_dir(&self) -> PathBuf {
        self.raw_dir().join("unesco")
    }

    pub fn interim_dir(&self) -> PathBuf {
        self.data_dir.join("interim")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.data_dir.join("public")
    }

    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
}

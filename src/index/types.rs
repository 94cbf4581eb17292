//! Data types used by the index pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::YearRange;

/// Grouping key of every per-country-year table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryYear {
    pub country_iso3: String,
    pub country_name: String,
    pub year: i32,
}

/// An observation with a resolved country, a year and a score in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedObservation {
    pub key: CountryYear,
    pub indicator_id: String,
    pub bucket: String,
    pub value: Option<f64>,
    pub norm: f64,
}

/// Mean normalized score of one bucket for one country-year.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketScore {
    pub key: CountryYear,
    pub bucket: String,
    pub bucket_score: f64,
}

/// Number of buckets present for a country-year and whether it passed the
/// coverage gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRow {
    pub country_iso3: String,
    pub country_name: String,
    pub year: i32,
    pub n_buckets: usize,
    pub included: bool,
}

/// Final index row, one per qualifying country-year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRow {
    pub country_iso3: String,
    pub country_name: String,
    pub year: i32,
    pub inequity_index: f64,
}

/// Per-indicator row accounting for one build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub indicator_id: String,
    pub bucket: String,
    pub rows_loaded: usize,
    pub unresolved_country: usize,
    pub outside_years: usize,
    pub duplicates_dropped: usize,
    pub dropped_incomplete: usize,
    pub rows_used: usize,
    pub degenerate: bool,
}

/// Written next to the index as `run_summary.json`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub years: YearRange,
    pub min_buckets: usize,
    pub indicators: Vec<IndicatorReport>,
    pub skipped_indicators: Vec<String>,
    pub country_years_seen: usize,
    pub country_years_indexed: usize,
}

//! The canonical tidy row every raw source is harmonized into.

use serde::{Deserialize, Serialize};

/// Column order of an interim indicator table.
pub const SCHEMA: [&str; 11] = [
    "country_iso3",
    "country_name",
    "year",
    "indicator_id",
    "value",
    "unit",
    "source",
    "disagg_type",
    "disagg_value",
    "is_imputed",
    "obs_status",
];

/// One observation of one indicator for one country-year.
///
/// `country_iso3` may be `None` for rows whose country could not be resolved;
/// those rows are dropped before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorObservation {
    pub country_iso3: Option<String>,
    pub country_name: Option<String>,
    pub year: Option<i32>,
    pub indicator_id: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub source: Option<String>,

    // disaggregation dimensions, not populated yet
    pub disagg_type: Option<String>,
    pub disagg_value: Option<String>,

    #[serde(default)]
    pub is_imputed: bool,
    pub obs_status: Option<String>,
}

impl IndicatorObservation {
    /// Builds an observation stamped with the indicator metadata and empty
    /// disaggregation fields.
    pub fn new(indicator_id: &str, unit: &str, source: &str) -> Self {
        IndicatorObservation {
            indicator_id: indicator_id.to_string(),
            unit: Some(unit.to_string()),
            source: Some(source.to_string()),
            ..Default::default()
        }
    }

    pub fn with_country(mut self, iso3: Option<String>, name: Option<String>) -> Self {
        self.country_iso3 = iso3;
        self.country_name = name;
        self
    }

    pub fn with_point(mut self, year: Option<i32>, value: Option<f64>) -> Self {
        self.year = year;
        self.value = value;
        self
    }

    /// True when the row carries a numeric value.
    pub fn has_value(&self) -> bool {
        self.value.is_some_and(|v| !v.is_nan())
    }
}

//! UNESCO and SDG-portal downloads.
//!
//! These files arrive in several shapes, so the layout is sniffed from the
//! header row before any row is read.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use super::table::{RawTable, parse_number, parse_year, read_any};
use crate::country::CountryResolver;
use crate::observation::IndicatorObservation;

pub const SOURCE: &str = "UNESCO";

const GEO_AREA_COLUMN: &str = "GeoAreaName";
const UNIT_COLUMNS: &[&str] = &["Units", "Unit"];
const COUNTRY_NAME_COLUMNS: &[&str] =
    &["Country", "COUNTRY", "country", "Ref_Area", "LOCATION_NAME"];
const ISO3_COLUMNS: &[&str] = &["ISO3", "Code", "Country Code", "REF_AREA", "LOCATION"];
const YEAR_COLUMNS: &[&str] = &["Year", "Time", "TIME_PERIOD", "Year_Code"];
const VALUE_COLUMNS: &[&str] = &["Value", "OBS_VALUE", "Observation Value", "obs_value"];

/// Positions of the four canonical columns, when present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnMap {
    pub country_name: Option<usize>,
    pub iso3: Option<usize>,
    pub year: Option<usize>,
    pub value: Option<usize>,
}

impl ColumnMap {
    fn find(table: &RawTable) -> Self {
        Self {
            country_name: table.first_column(COUNTRY_NAME_COLUMNS),
            iso3: table.first_column(ISO3_COLUMNS),
            year: table.first_column(YEAR_COLUMNS),
            value: table.first_column(VALUE_COLUMNS),
        }
    }

    fn is_complete(&self) -> bool {
        self.country_name.is_some()
            && self.iso3.is_some()
            && self.year.is_some()
            && self.value.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceLayout {
    /// SDG portal: wide years keyed by a free-text `GeoAreaName`. Its numeric
    /// area codes are M49, not ISO3, so names are resolved instead.
    GeoArea { name: usize, unit: Option<usize> },
    /// Year columns without a year field.
    WideYears(ColumnMap),
    /// One observation per row. Missing columns yield nulls.
    Long(ColumnMap),
}

impl SourceLayout {
    pub fn detect(table: &RawTable) -> Self {
        if let Some(name) = table.column(GEO_AREA_COLUMN) {
            return SourceLayout::GeoArea {
                name,
                unit: table.first_column(UNIT_COLUMNS),
            };
        }

        let columns = ColumnMap::find(table);
        if columns.year.is_none() && table.has_year_columns() {
            SourceLayout::WideYears(columns)
        } else {
            SourceLayout::Long(columns)
        }
    }
}

/// Reads a UNESCO file and converts it to tidy observations.
///
/// # Errors
///
/// Fails on unsupported file types and unreadable files. Malformed content
/// degrades to null fields instead.
pub fn tidy_unesco_file(
    path: &Path,
    indicator_id: &str,
    unit: &str,
    resolver: &dyn CountryResolver,
) -> Result<Vec<IndicatorObservation>> {
    let table = read_any(path)?;
    Ok(tidy_unesco_table(&table, indicator_id, unit, resolver))
}

pub fn tidy_unesco_table(
    table: &RawTable,
    indicator_id: &str,
    unit: &str,
    resolver: &dyn CountryResolver,
) -> Vec<IndicatorObservation> {
    let layout = SourceLayout::detect(table);
    debug!(indicator_id, ?layout, rows = table.rows.len(), "Detected source layout");

    let base = IndicatorObservation::new(indicator_id, unit, SOURCE);

    match layout {
        SourceLayout::GeoArea { name, unit: unit_col } => {
            let names = table.column_values(Some(name));
            let iso3 = resolve_names(&names, resolver);

            table
                .melt_years()
                .into_iter()
                .map(|m| {
                    let mut obs = base
                        .clone()
                        .with_country(iso3[m.row].clone(), names[m.row].clone())
                        .with_point(m.year, m.value);
                    if let Some(u) = unit_col.and_then(|c| table.cell(m.row, c)) {
                        obs.unit = Some(u.to_string());
                    }
                    obs
                })
                .collect()
        }
        SourceLayout::WideYears(columns) => {
            let names = table.column_values(columns.country_name);
            let iso3 = match (columns.iso3, columns.country_name) {
                (Some(_), _) => table.column_values(columns.iso3),
                (None, Some(_)) => resolve_names(&names, resolver),
                (None, None) => vec![None; names.len()],
            };

            table
                .melt_years()
                .into_iter()
                .map(|m| {
                    base.clone()
                        .with_country(iso3[m.row].clone(), names[m.row].clone())
                        .with_point(m.year, m.value)
                })
                .collect()
        }
        SourceLayout::Long(columns) => {
            if !columns.is_complete() {
                warn!(
                    indicator_id,
                    ?columns,
                    "Source is missing canonical columns, filling with nulls"
                );
            }

            let names = table.column_values(columns.country_name);
            let iso3 = table.column_values(columns.iso3);
            let years = table.column_values(columns.year);
            let values = table.column_values(columns.value);

            (0..table.rows.len())
                .map(|row| {
                    base.clone()
                        .with_country(iso3[row].clone(), names[row].clone())
                        .with_point(
                            years[row].as_deref().and_then(parse_year),
                            values[row].as_deref().and_then(parse_number),
                        )
                })
                .collect()
        }
    }
}

/// Resolves each present name; absent names stay `None`.
fn resolve_names(names: &[Option<String>], resolver: &dyn CountryResolver) -> Vec<Option<String>> {
    let idents: Vec<String> = names.iter().map(|n| n.clone().unwrap_or_default()).collect();
    resolver
        .resolve(&idents)
        .into_iter()
        .zip(names)
        .map(|(code, name)| name.as_ref().and(code))
        .collect()
}

//! Public artifacts derived from the index and the interim indicator tables,
//! shaped for spreadsheet and BI tools.
//!
//! | File                           | Content                                        |
//! |--------------------------------|------------------------------------------------|
//! | `inequity_index.csv`           | index within the year window, 3 decimals       |
//! | `inequity_index_latest.csv`    | most recent index row per country              |
//! | `indicators_long.csv`          | raw indicator values, one row per observation  |
//! | `coverage.csv`                 | number of indicators with data per country-year|
//! | `coverage_by_country_year.csv` | indicator availability matrix                  |

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{error, info, warn};

use crate::catalog::{Catalog, IndicatorSpec};
use crate::config::{Settings, YearRange};
use crate::country::CountryResolver;
use crate::index::pipeline::{load_index, load_interim};
use crate::index::types::IndexRow;
use crate::index::utility::round_to;
use crate::observation::IndicatorObservation;
use crate::output::{write_csv_atomic, write_records_atomic};

/// First year included in the long indicator export.
pub const LONG_EXPORT_FIRST_YEAR: i32 = 2010;

const DECIMALS: i32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicIndexRow {
    #[serde(rename = "ISO3")]
    pub iso3: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "InequityIndex")]
    pub inequity_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorLongRow {
    #[serde(rename = "ISO3")]
    pub iso3: String,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Bucket")]
    pub bucket: String,
    #[serde(rename = "Indicator")]
    pub indicator: String,
    #[serde(rename = "IndicatorID")]
    pub indicator_id: String,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageCountRow {
    #[serde(rename = "ISO3")]
    pub iso3: String,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "AvailableIndicators")]
    pub available_indicators: usize,
}

/// Index rows within `years`, with the index rounded for display.
pub fn public_index_rows(rows: &[IndexRow], years: YearRange) -> Vec<PublicIndexRow> {
    rows.iter()
        .filter(|r| years.contains(r.year))
        .map(|r| PublicIndexRow {
            iso3: r.country_iso3.clone(),
            country: r.country_name.clone(),
            year: r.year,
            inequity_index: round_to(r.inequity_index, DECIMALS),
        })
        .collect()
}

/// The chronologically last row for each country.
pub fn latest_per_country(rows: &[PublicIndexRow]) -> Vec<PublicIndexRow> {
    let mut latest: BTreeMap<&str, &PublicIndexRow> = BTreeMap::new();
    for row in rows {
        match latest.get(row.iso3.as_str()) {
            Some(seen) if seen.year > row.year => {}
            _ => {
                latest.insert(&row.iso3, row);
            }
        }
    }
    latest.into_values().cloned().collect()
}

/// The `n` best rows of the most recent years: year descending, then index
/// descending.
pub fn top_rows(rows: &[IndexRow], n: usize) -> Vec<IndexRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then(b.inequity_index.total_cmp(&a.inequity_index))
    });
    sorted.truncate(n);
    sorted
}

/// Drops rows whose country does not resolve and canonicalizes the rest.
fn countries_only(
    rows: Vec<IndicatorObservation>,
    resolver: &dyn CountryResolver,
) -> Vec<IndicatorObservation> {
    let ids: Vec<String> = rows
        .iter()
        .map(|r| r.country_iso3.clone().unwrap_or_default())
        .collect();
    rows.into_iter()
        .zip(resolver.resolve(&ids))
        .filter_map(|(mut row, code)| {
            row.country_iso3 = Some(code?);
            Some(row)
        })
        .collect()
}

/// One long-format row per country observation of `spec` within `years`.
pub fn indicator_long_rows(
    spec: &IndicatorSpec,
    rows: Vec<IndicatorObservation>,
    resolver: &dyn CountryResolver,
    years: YearRange,
) -> Vec<IndicatorLongRow> {
    countries_only(rows, resolver)
        .into_iter()
        .filter_map(|r| {
            let year = r.year.filter(|y| years.contains(*y))?;
            Some(IndicatorLongRow {
                iso3: r.country_iso3?,
                country: r.country_name,
                year,
                bucket: spec.bucket.clone(),
                indicator: spec.alias.clone(),
                indicator_id: spec.id.clone(),
                value: r.value.map(|v| round_to(v, DECIMALS)),
            })
        })
        .collect()
}

/// Counts indicators with a value per recognized country-year.
pub fn coverage_counts(
    tables: Vec<Vec<IndicatorObservation>>,
    resolver: &dyn CountryResolver,
) -> Vec<CoverageCountRow> {
    let mut counts: BTreeMap<(String, Option<String>, i32), usize> = BTreeMap::new();

    for rows in tables {
        for r in countries_only(rows, resolver) {
            if !r.has_value() {
                continue;
            }
            let (Some(iso3), Some(year)) = (r.country_iso3, r.year) else {
                continue;
            };
            *counts.entry((iso3, r.country_name, year)).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|((iso3, country, year), n)| CoverageCountRow {
            iso3,
            country,
            year,
            available_indicators: n,
        })
        .collect()
}

/// Availability matrix: one row per country-year, one boolean column per
/// indicator (sorted by id), plus `available_count`. Rows are ordered by year
/// descending, then count descending.
pub fn coverage_matrix(
    tables: &[(String, Vec<IndicatorObservation>)],
) -> (Vec<String>, Vec<Vec<String>>) {
    let indicator_ids: BTreeSet<&str> = tables.iter().map(|(id, _)| id.as_str()).collect();
    let mut cells: BTreeMap<(&str, &str, i32), BTreeMap<&str, bool>> = BTreeMap::new();

    for (id, rows) in tables {
        for r in rows {
            let (Some(iso3), Some(name), Some(year)) = (&r.country_iso3, &r.country_name, r.year)
            else {
                continue;
            };
            let has = cells
                .entry((iso3.as_str(), name.as_str(), year))
                .or_default()
                .entry(id.as_str())
                .or_default();
            *has |= r.has_value();
        }
    }

    let mut header: Vec<String> = vec!["country_iso3".into(), "country_name".into(), "year".into()];
    header.extend(indicator_ids.iter().map(|id| id.to_string()));
    header.push("available_count".into());

    let mut rows: Vec<(i32, usize, Vec<String>)> = cells
        .into_iter()
        .map(|((iso3, name, year), present)| {
            let flags: Vec<bool> = indicator_ids
                .iter()
                .map(|id| present.get(id).copied().unwrap_or(false))
                .collect();
            let count = flags.iter().filter(|f| **f).count();

            let mut record = vec![iso3.to_string(), name.to_string(), year.to_string()];
            record.extend(flags.iter().map(|f| f.to_string()));
            record.push(count.to_string());
            (year, count, record)
        })
        .collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    (header, rows.into_iter().map(|(_, _, r)| r).collect())
}

/// Writes `inequity_index.csv` and `inequity_index_latest.csv`.
pub fn export_index(settings: &Settings) -> Result<usize> {
    let rows = public_index_rows(&load_index(&settings.interim_dir())?, settings.years);
    let public = settings.public_dir();

    let out = public.join("inequity_index.csv");
    write_csv_atomic(&out, &rows)?;
    info!(path = %out.display(), rows = rows.len(), "Wrote public index");

    let latest = latest_per_country(&rows);
    let out = public.join("inequity_index_latest.csv");
    write_csv_atomic(&out, &latest)?;
    info!(path = %out.display(), rows = latest.len(), "Wrote latest index per country");

    Ok(rows.len())
}

fn load_available<'a>(
    interim: &Path,
    catalog: &'a Catalog,
) -> Result<Vec<(&'a IndicatorSpec, Vec<IndicatorObservation>)>> {
    let mut out = Vec::new();
    for spec in &catalog.indicators {
        if let Some(rows) = load_interim(interim, &spec.id)? {
            out.push((spec, rows));
        }
    }
    Ok(out)
}

/// Writes `indicators_long.csv`.
pub fn export_indicators_long(
    settings: &Settings,
    catalog: &Catalog,
    resolver: &dyn CountryResolver,
) -> Result<usize> {
    let tables = load_available(&settings.interim_dir(), catalog)?;
    if tables.is_empty() {
        error!("No indicator files found to export.");
        return Ok(0);
    }

    let window = YearRange::new(
        LONG_EXPORT_FIRST_YEAR,
        settings.years.end.max(LONG_EXPORT_FIRST_YEAR),
    )?;
    let rows: Vec<IndicatorLongRow> = tables
        .into_iter()
        .flat_map(|(spec, rows)| indicator_long_rows(spec, rows, resolver, window))
        .collect();

    let out = settings.public_dir().join("indicators_long.csv");
    write_csv_atomic(&out, &rows)?;
    info!(path = %out.display(), rows = rows.len(), "Wrote long indicator table");
    Ok(rows.len())
}

/// Writes `coverage.csv`.
pub fn export_coverage(
    settings: &Settings,
    catalog: &Catalog,
    resolver: &dyn CountryResolver,
) -> Result<usize> {
    let tables = load_available(&settings.interim_dir(), catalog)?;
    let rows = coverage_counts(tables.into_iter().map(|(_, rows)| rows).collect(), resolver);
    if rows.is_empty() {
        warn!("No indicator values to count, skipping coverage export");
        return Ok(0);
    }

    let out = settings.public_dir().join("coverage.csv");
    write_csv_atomic(&out, &rows)?;
    info!(path = %out.display(), rows = rows.len(), "Wrote coverage counts");
    Ok(rows.len())
}

/// Writes `coverage_by_country_year.csv`.
pub fn export_coverage_matrix(settings: &Settings, catalog: &Catalog) -> Result<usize> {
    let tables: Vec<(String, Vec<IndicatorObservation>)> =
        load_available(&settings.interim_dir(), catalog)?
            .into_iter()
            .map(|(spec, rows)| (spec.id.clone(), rows))
            .collect();
    if tables.is_empty() {
        bail!("No interim files found. Run harmonize first.");
    }

    let (header, records) = coverage_matrix(&tables);
    let out = settings.public_dir().join("coverage_by_country_year.csv");
    write_records_atomic(&out, &header, &records)?;
    info!(path = %out.display(), rows = records.len(), "Wrote coverage matrix");
    Ok(records.len())
}

/// Runs the index, long-table and coverage-count exports.
#[tracing::instrument(skip_all, fields(public_dir = %settings.public_dir().display()))]
pub fn run(settings: &Settings, catalog: &Catalog, resolver: &dyn CountryResolver) -> Result<()> {
    export_index(settings)?;
    export_indicators_long(settings, catalog, resolver)?;
    export_coverage(settings, catalog, resolver)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::StaticCountryResolver;

    #[test]
    fn test_public_rows_filter_years_and_round() {
        let rows = vec![index_row("KEN", 2014, 0.5), index_row("KEN", 2015, 0.123456)];

        let public = public_index_rows(&rows, YearRange::new(2015, 2024).unwrap());

        assert_eq!(public.len(), 1);
        assert_eq!(public[0].inequity_index, 0.123);
    }

    #[test]
    fn test_top_rows_prefer_recent_then_highest() {
        let rows = vec![
            index_row("GHA", 2020, 0.9),
            index_row("KEN", 2021, 0.2),
            index_row("AGO", 2021, 0.7),
        ];

        let top = top_rows(&rows, 2);
        let keys: Vec<_> = top.iter().map(|r| r.country_iso3.as_str()).collect();

        assert_eq!(keys, vec!["AGO", "KEN"]);
        assert_eq!(top_rows(&rows, 10).len(), 3);
    }

    #[test]
    fn test_latest_per_country() {
        let rows = public_index_rows(
            &[
                index_row("GHA", 2019, 0.1),
                index_row("KEN", 2021, 0.2),
                index_row("KEN", 2016, 0.3),
                index_row("GHA", 2018, 0.4),
            ],
            YearRange::new(2015, 2024).unwrap(),
        );

        let latest = latest_per_country(&rows);

        assert_eq!(latest.len(), 2);
        assert_eq!((latest[0].iso3.as_str(), latest[0].year), ("GHA", 2019));
        assert_eq!((latest[1].iso3.as_str(), latest[1].year), ("KEN", 2021));
    }

    #[test]
    fn test_public_header_names() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .serialize(PublicIndexRow {
                iso3: "KEN".into(),
                country: "Kenya".into(),
                year: 2020,
                inequity_index: 0.5,
            })
            .unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert!(text.starts_with("ISO3,Country,Year,InequityIndex\n"));
    }

    #[test]
    fn test_long_rows_drop_aggregates_and_use_alias() {
        let spec = Catalog::default().get("SDG_4.2.2").unwrap().clone();
        let rows = vec![
            obs("KEN", "Kenya", Some(2012), Some(55.5556)),
            obs("WLD", "World", Some(2012), Some(60.0)),
            obs("KEN", "Kenya", Some(2009), Some(50.0)),
            obs("KEN", "Kenya", None, Some(50.0)),
        ];

        let window = YearRange::new(2010, 2024).unwrap();
        let long = indicator_long_rows(&spec, rows, &StaticCountryResolver::new(), window);

        assert_eq!(long.len(), 1);
        assert_eq!(long[0].indicator, "EarlyChildhood_participation");
        assert_eq!(long[0].bucket, "EarlyChildhood");
        assert_eq!(long[0].value, Some(55.556));
    }

    #[test]
    fn test_coverage_counts_values_per_country_year() {
        let a = vec![
            obs("KEN", "Kenya", Some(2020), Some(1.0)),
            obs("WLD", "World", Some(2020), Some(1.0)),
        ];
        let b = vec![
            obs("KEN", "Kenya", Some(2020), Some(2.0)),
            obs("GHA", "Ghana", Some(2020), None),
        ];

        let counts = coverage_counts(vec![a, b], &StaticCountryResolver::new());

        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].iso3, "KEN");
        assert_eq!(counts[0].available_indicators, 2);
    }

    #[test]
    fn test_coverage_matrix_shape_and_order() {
        let tables = vec![
            (
                "B_ind".to_string(),
                vec![
                    obs("KEN", "Kenya", Some(2019), Some(1.0)),
                    obs("GHA", "Ghana", Some(2020), None),
                ],
            ),
            (
                "A_ind".to_string(),
                vec![
                    obs("KEN", "Kenya", Some(2019), Some(1.0)),
                    obs("GHA", "Ghana", Some(2020), Some(3.0)),
                    obs("UGA", "Uganda", Some(2020), Some(3.0)),
                ],
            ),
        ];

        let (header, records) = coverage_matrix(&tables);

        assert_eq!(
            header,
            vec!["country_iso3", "country_name", "year", "A_ind", "B_ind", "available_count"]
        );
        assert_eq!(records.len(), 3);
        // newest year first
        assert_eq!(records[0][2], "2020");
        assert_eq!(records[1][2], "2020");
        assert_eq!(records[2], vec!["KEN", "Kenya", "2019", "true", "true", "2"]);
        assert_eq!(records[0], vec!["GHA", "Ghana", "2020", "true", "false", "1"]);
    }

    // Helper functions for tests
    fn index_row(iso3: &str, year: i32, index: f64) -> IndexRow {
        IndexRow {
            country_iso3: iso3.to_string(),
            country_name: iso3.to_string(),
            year,
            inequity_index: index,
        }
    }

    fn obs(iso3: &str, name: &str, year: Option<i32>, value: Option<f64>) -> IndicatorObservation {
        IndicatorObservation::new("X", "percent", "UNESCO")
            .with_country(Some(iso3.to_string()), Some(name.to_string()))
            .with_point(year, value)
    }
}

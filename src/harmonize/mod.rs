//! Source harmonization: raw downloads in, one tidy CSV per indicator out.
//!
//! World Bank indicators are read from `raw/wb_<id>.zip`; UNESCO indicators
//! from the first of `raw/unesco/<stem>.{xlsx,xls,csv}` that exists. Each
//! result is written to `interim/<id>.csv` using the [`SCHEMA`] columns.
//!
//! [`SCHEMA`]: crate::observation::SCHEMA

#[cfg(test)]
mod fixtures;
pub mod table;
pub mod unesco;
pub mod worldbank;

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::catalog::{Catalog, IndicatorSpec, RawSource};
use crate::config::Settings;
use crate::country::CountryResolver;
use crate::fetch::worldbank::zip_path;
use crate::observation::IndicatorObservation;
use crate::output::{write_csv_atomic, write_json_atomic};

pub use unesco::tidy_unesco_file;
pub use worldbank::tidy_wb_zip;

/// Extensions tried, in order, for a UNESCO file stem.
const UNESCO_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];

pub const REPORT_FILE: &str = "harmonize_report.json";

/// Row accounting for one interim table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonizedIndicator {
    pub indicator_id: String,
    pub source_file: String,
    pub rows: usize,
    pub null_values: usize,
    pub null_years: usize,
    pub missing_country: usize,
}

impl HarmonizedIndicator {
    pub fn from_rows(indicator_id: &str, source: &Path, rows: &[IndicatorObservation]) -> Self {
        Self {
            indicator_id: indicator_id.to_string(),
            source_file: source.display().to_string(),
            rows: rows.len(),
            null_values: rows.iter().filter(|r| !r.has_value()).count(),
            null_years: rows.iter().filter(|r| r.year.is_none()).count(),
            missing_country: rows.iter().filter(|r| r.country_iso3.is_none()).count(),
        }
    }
}

/// Written to `interim/harmonize_report.json` after each run.
#[derive(Debug, Default, Serialize)]
pub struct HarmonizeReport {
    pub indicators: Vec<HarmonizedIndicator>,
    pub missing: Vec<String>,
}

/// Path of the interim table for `indicator_id`.
pub fn interim_path(interim_dir: &Path, indicator_id: &str) -> PathBuf {
    interim_dir.join(format!("{}.csv", indicator_id))
}

/// Locates the raw file for an indicator, if it has been downloaded.
pub fn raw_path(settings: &Settings, spec: &IndicatorSpec) -> Option<PathBuf> {
    match &spec.source {
        RawSource::WorldBank => {
            let p = zip_path(&settings.raw_dir(), &spec.id);
            p.exists().then_some(p)
        }
        RawSource::Unesco { stem } => first_existing(&settings.unesco_dir(), stem),
    }
}

fn first_existing(dir: &Path, stem: &str) -> Option<PathBuf> {
    UNESCO_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.exists())
}

/// Converts one raw file into tidy observations.
///
/// # Errors
///
/// Propagates unsupported file types and unreadable archives.
pub fn harmonize_indicator(
    spec: &IndicatorSpec,
    path: &Path,
    resolver: &dyn CountryResolver,
) -> Result<Vec<IndicatorObservation>> {
    match spec.source {
        RawSource::WorldBank => tidy_wb_zip(path, &spec.id, &spec.unit),
        RawSource::Unesco { .. } => tidy_unesco_file(path, &spec.id, &spec.unit, resolver),
    }
}

/// Harmonizes every catalog indicator whose raw file exists.
#[tracing::instrument(skip_all, fields(data_dir = %settings.data_dir.display()))]
pub fn run(
    settings: &Settings,
    catalog: &Catalog,
    resolver: &dyn CountryResolver,
) -> Result<HarmonizeReport> {
    let interim = settings.interim_dir();
    let mut report = HarmonizeReport::default();

    for spec in &catalog.indicators {
        let Some(path) = raw_path(settings, spec) else {
            warn!(
                indicator_id = %spec.id,
                source = ?spec.source,
                "Missing raw file, skipping indicator"
            );
            report.missing.push(spec.id.clone());
            continue;
        };

        let rows = harmonize_indicator(spec, &path, resolver)?;
        let out = interim_path(&interim, &spec.id);
        write_csv_atomic(&out, &rows)?;

        let counts = HarmonizedIndicator::from_rows(&spec.id, &path, &rows);
        if counts.null_years > 0 {
            warn!(
                indicator_id = %spec.id,
                path = %path.display(),
                rows = counts.null_years,
                "Rows without a parseable year"
            );
        }
        info!(
            path = %out.display(),
            rows = counts.rows,
            null_values = counts.null_values,
            null_years = counts.null_years,
            missing_country = counts.missing_country,
            "Wrote interim indicator table"
        );

        report.indicators.push(counts);
    }

    write_json_atomic(&interim.join(REPORT_FILE), &report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::StaticCountryResolver;
    use crate::harmonize::fixtures::{num, text, workbook};
    use crate::output::read_csv;
    use std::fs;

    fn settings(dir: &Path) -> Settings {
        Settings::from_lookup(|_| None).unwrap().with_data_dir(dir)
    }

    #[test]
    fn test_first_existing_prefers_spreadsheets() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("S.csv"), "").unwrap();
        assert_eq!(first_existing(dir.path(), "S"), Some(dir.path().join("S.csv")));

        fs::write(dir.path().join("S.xls"), "").unwrap();
        assert_eq!(first_existing(dir.path(), "S"), Some(dir.path().join("S.xls")));

        assert_eq!(first_existing(dir.path(), "Other"), None);
    }

    #[test]
    fn test_run_skips_missing_and_writes_found() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        fs::create_dir_all(settings.unesco_dir()).unwrap();
        fs::write(
            settings.unesco_dir().join("SDG_4.2.2.csv"),
            "Country,ISO3,Year,Value\nKenya,KEN,2020,75\nGhana,GHA,2020,60\n",
        )
        .unwrap();

        let report = run(&settings, &Catalog::default(), &StaticCountryResolver::new()).unwrap();

        assert_eq!(report.indicators.len(), 1);
        assert_eq!(report.indicators[0].indicator_id, "SDG_4.2.2");
        assert_eq!(report.indicators[0].rows, 2);
        assert_eq!(report.missing.len(), 5);
        assert!(settings.interim_dir().join(REPORT_FILE).exists());

        let rows: Vec<IndicatorObservation> =
            read_csv(&interim_path(&settings.interim_dir(), "SDG_4.2.2")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].country_iso3.as_deref(), Some("GHA"));
    }

    #[test]
    fn test_run_reads_workbook_before_csv() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        fs::create_dir_all(settings.unesco_dir()).unwrap();
        fs::write(
            settings.unesco_dir().join("SDG_4.2.2.xlsx"),
            workbook(&[
                &[text("GeoAreaName"), text("Units"), num("2020")],
                &[text("Kenya"), text("PERCENT"), num("75")],
                &[text("World"), text("PERCENT"), num("70")],
            ]),
        )
        .unwrap();
        let header_only = "Country,ISO3,Year,Value\n";
        fs::write(settings.unesco_dir().join("SDG_4.2.2.csv"), header_only).unwrap();
        fs::write(
            settings.unesco_dir().join("SDG_4.c.1_prim.csv"),
            "Country,ISO3,Year,Value\nGhana,GHA,2020,60\n",
        )
        .unwrap();

        let report = run(&settings, &Catalog::default(), &StaticCountryResolver::new()).unwrap();

        assert_eq!(report.indicators.len(), 2);
        let rows: Vec<IndicatorObservation> =
            read_csv(&interim_path(&settings.interim_dir(), "SDG_4.2.2")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country_iso3.as_deref(), Some("KEN"));
        assert_eq!(rows[0].value, Some(75.0));
        assert_eq!(rows[0].unit.as_deref(), Some("PERCENT"));
        assert_eq!(rows[1].country_iso3, None);
    }

    #[test]
    fn test_report_counts_coerced_cells() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        fs::create_dir_all(settings.unesco_dir()).unwrap();
        fs::write(
            settings.unesco_dir().join("SDG_4.2.2.csv"),
            "Country,ISO3,Year,Value\nKenya,KEN,2020,..\nGhana,GHA,n/a,60\nWorld,,2020,55\n",
        )
        .unwrap();

        let report = run(&settings, &Catalog::default(), &StaticCountryResolver::new()).unwrap();

        let counts = &report.indicators[0];
        assert_eq!(counts.rows, 3);
        assert_eq!(counts.null_values, 1);
        assert_eq!(counts.null_years, 1);
        assert_eq!(counts.missing_country, 1);
    }

    #[test]
    fn test_run_fails_on_corrupt_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        fs::create_dir_all(settings.unesco_dir()).unwrap();
        fs::write(settings.unesco_dir().join("SDG_4.2.2.xlsx"), "PK").unwrap();

        let err = run(&settings, &Catalog::default(), &StaticCountryResolver::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to open workbook"));
    }
}

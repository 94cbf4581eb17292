use crate::catalog::{Catalog, IndicatorSpec};
use crate::config::{Settings, YearRange};
use crate::country::CountryResolver;
use crate::harmonize::interim_path;
use crate::index::aggregate::{MIN_BUCKETS, apply_coverage_gate, bucket_scores, combine};
use crate::index::normalize::{is_degenerate, normalize_indicator, scored_values};
use crate::index::types::{
    CountryYear, CoverageRow, IndexRow, IndicatorReport, NormalizedObservation, RunSummary,
};
use crate::observation::IndicatorObservation;
use crate::output::{read_csv, write_csv_atomic, write_json_atomic};
use anyhow::{Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const INDEX_FILE: &str = "inequity_index.csv";
pub const COVERAGE_FILE: &str = "bucket_coverage.csv";
pub const SUMMARY_FILE: &str = "run_summary.json";

/// One indicator's interim rows paired with its catalog entry.
pub struct IndicatorTable<'a> {
    pub spec: &'a IndicatorSpec,
    pub rows: Vec<IndicatorObservation>,
}

/// Result of a build before it is written out.
#[derive(Debug)]
pub struct IndexBuild {
    pub rows: Vec<IndexRow>,
    pub coverage: Vec<CoverageRow>,
    pub indicators: Vec<IndicatorReport>,
}

pub fn index_path(interim_dir: &Path) -> PathBuf {
    interim_dir.join(INDEX_FILE)
}

/// Loads an interim indicator table. A missing file is not an error: it is
/// logged and reported as `None`.
pub fn load_interim(
    interim_dir: &Path,
    indicator_id: &str,
) -> Result<Option<Vec<IndicatorObservation>>> {
    let path = interim_path(interim_dir, indicator_id);
    if !path.exists() {
        warn!(path = %path.display(), "Missing interim indicator file");
        return Ok(None);
    }

    let mut rows: Vec<IndicatorObservation> = read_csv(&path)?;
    for row in &mut rows {
        row.indicator_id = indicator_id.to_string();
    }
    Ok(Some(rows))
}

/// Loads the persisted index produced by [`run`].
pub fn load_index(interim_dir: &Path) -> Result<Vec<IndexRow>> {
    let path = index_path(interim_dir);
    if !path.exists() {
        bail!("Missing {}. Run build first.", path.display());
    }
    read_csv(&path)
}

/// Resolves countries, restricts to the year window and normalizes one
/// indicator.
///
/// The year window is applied before normalization so that observations
/// outside it never shape the min-max range. Repeated (country, year,
/// disaggregation) rows keep only their first occurrence.
pub fn prepare_indicator(
    spec: &IndicatorSpec,
    rows: Vec<IndicatorObservation>,
    resolver: &dyn CountryResolver,
    years: YearRange,
) -> (Vec<NormalizedObservation>, IndicatorReport) {
    let mut report = IndicatorReport {
        indicator_id: spec.id.clone(),
        bucket: spec.bucket.clone(),
        rows_loaded: rows.len(),
        ..Default::default()
    };

    let ids: Vec<String> = rows
        .iter()
        .map(|r| r.country_iso3.clone().unwrap_or_default())
        .collect();
    let resolved = resolver.resolve(&ids);

    let mut countries = Vec::with_capacity(rows.len());
    for (mut row, code) in rows.into_iter().zip(resolved) {
        match code {
            Some(code) => {
                row.country_iso3 = Some(code);
                countries.push(row);
            }
            None => report.unresolved_country += 1,
        }
    }
    if report.unresolved_country > 0 {
        warn!(
            indicator_id = %spec.id,
            rows = report.unresolved_country,
            "Dropped rows without a recognized country"
        );
    }

    let before = countries.len();
    let in_window: Vec<IndicatorObservation> = countries
        .into_iter()
        .filter(|r| r.year.is_some_and(|y| years.contains(y)))
        .collect();
    report.outside_years = before - in_window.len();

    // one row per (country, year, disaggregation); the first occurrence wins
    let before = in_window.len();
    let mut seen = BTreeSet::new();
    let in_window: Vec<IndicatorObservation> = in_window
        .into_iter()
        .filter(|r| {
            seen.insert((
                r.country_iso3.clone(),
                r.year,
                r.disagg_type.clone(),
                r.disagg_value.clone(),
            ))
        })
        .collect();
    report.duplicates_dropped = before - in_window.len();
    if report.duplicates_dropped > 0 {
        warn!(
            indicator_id = %spec.id,
            rows = report.duplicates_dropped,
            "Duplicate country-year rows, keeping the first of each"
        );
    }

    let values: Vec<Option<f64>> = in_window.iter().map(|r| r.value).collect();
    report.degenerate = is_degenerate(&scored_values(&values, spec.transform));
    if report.degenerate {
        warn!(
            indicator_id = %spec.id,
            rows = values.len(),
            "Indicator has no spread, scoring all rows as 0"
        );
    }
    let norms = normalize_indicator(&values, spec.transform);

    let mut out = Vec::with_capacity(in_window.len());
    for (row, norm) in in_window.into_iter().zip(norms) {
        let (Some(iso3), Some(name), Some(year), Some(norm)) =
            (row.country_iso3, row.country_name, row.year, norm)
        else {
            report.dropped_incomplete += 1;
            continue;
        };
        out.push(NormalizedObservation {
            key: CountryYear {
                country_iso3: iso3,
                country_name: name,
                year,
            },
            indicator_id: spec.id.clone(),
            bucket: spec.bucket.clone(),
            value: row.value,
            norm,
        });
    }
    report.rows_used = out.len();

    (out, report)
}

/// Runs normalize → bucket → coverage gate → combine over in-memory tables.
///
/// # Errors
///
/// Fails when no tables are given or when no country-year reaches
/// [`MIN_BUCKETS`] buckets.
pub fn build_index(
    tables: Vec<IndicatorTable<'_>>,
    weights: &BTreeMap<String, f64>,
    resolver: &dyn CountryResolver,
    years: YearRange,
) -> Result<IndexBuild> {
    if tables.is_empty() {
        bail!("No indicators available. Did you run harmonize?");
    }

    let mut normalized = Vec::new();
    let mut indicators = Vec::with_capacity(tables.len());
    for table in tables {
        let (rows, report) = prepare_indicator(table.spec, table.rows, resolver, years);
        info!(
            indicator_id = %report.indicator_id,
            bucket = %report.bucket,
            rows_used = report.rows_used,
            "Normalized indicator"
        );
        normalized.extend(rows);
        indicators.push(report);
    }

    let scores = bucket_scores(&normalized);
    let (present, coverage) = apply_coverage_gate(scores, MIN_BUCKETS);

    let excluded = coverage.iter().filter(|c| !c.included).count();
    if excluded > 0 {
        info!(
            country_years = excluded,
            min_buckets = MIN_BUCKETS,
            "Country-years below minimum bucket coverage left out of the index"
        );
    }

    if present.is_empty() {
        bail!("No country-years with minimum coverage (>={} buckets).", MIN_BUCKETS);
    }

    let rows = combine(&present, weights);

    Ok(IndexBuild {
        rows,
        coverage,
        indicators,
    })
}

/// Loads every catalog indicator from the interim directory, builds the index
/// and writes the index, bucket coverage and run summary artifacts.
#[tracing::instrument(
    skip_all,
    fields(data_dir = %settings.data_dir.display(), years = %settings.years)
)]
pub fn run(
    settings: &Settings,
    catalog: &Catalog,
    resolver: &dyn CountryResolver,
) -> Result<RunSummary> {
    let interim = settings.interim_dir();

    let mut tables = Vec::new();
    let mut skipped = Vec::new();
    for spec in &catalog.indicators {
        match load_interim(&interim, &spec.id)? {
            Some(rows) => tables.push(IndicatorTable { spec, rows }),
            None => skipped.push(spec.id.clone()),
        }
    }

    let build = build_index(tables, &catalog.weights(), resolver, settings.years)?;

    let out = index_path(&interim);
    write_csv_atomic(&out, &build.rows)?;
    info!(path = %out.display(), rows = build.rows.len(), "Wrote inequity index");

    let coverage_out = interim.join(COVERAGE_FILE);
    write_csv_atomic(&coverage_out, &build.coverage)?;

    let summary = RunSummary {
        generated_at: chrono::Utc::now(),
        years: settings.years,
        min_buckets: MIN_BUCKETS,
        indicators: build.indicators,
        skipped_indicators: skipped,
        country_years_seen: build.coverage.len(),
        country_years_indexed: build.rows.len(),
    };
    write_json_atomic(&interim.join(SUMMARY_FILE), &summary)?;

    Ok(summary)
}

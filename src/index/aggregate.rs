use crate::index::types::{BucketScore, CountryYear, CoverageRow, IndexRow, NormalizedObservation};
use crate::index::utility::{mean, weighted_mean};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Country-years with fewer distinct buckets than this are left out of the
/// index.
pub const MIN_BUCKETS: usize = 2;

/// Averages normalized scores per (country-year, bucket), unweighted across
/// the bucket's indicators.
pub fn bucket_scores(observations: &[NormalizedObservation]) -> Vec<BucketScore> {
    let mut series: BTreeMap<(&CountryYear, &str), Vec<f64>> = BTreeMap::new();

    for obs in observations {
        series
            .entry((&obs.key, obs.bucket.as_str()))
            .or_default()
            .push(obs.norm);
    }

    series
        .into_iter()
        .map(|((key, bucket), norms)| BucketScore {
            key: key.clone(),
            bucket: bucket.to_string(),
            bucket_score: mean(&norms),
        })
        .collect()
}

/// Keeps bucket scores of country-years with at least `min_buckets` distinct
/// buckets present. Also returns the per-country-year bucket counts, so the
/// exclusions can be reported.
pub fn apply_coverage_gate(
    scores: Vec<BucketScore>,
    min_buckets: usize,
) -> (Vec<BucketScore>, Vec<CoverageRow>) {
    let mut present: BTreeMap<CountryYear, BTreeSet<String>> = BTreeMap::new();
    for s in &scores {
        present
            .entry(s.key.clone())
            .or_default()
            .insert(s.bucket.clone());
    }

    let coverage: Vec<CoverageRow> = present
        .iter()
        .map(|(key, buckets)| CoverageRow {
            country_iso3: key.country_iso3.clone(),
            country_name: key.country_name.clone(),
            year: key.year,
            n_buckets: buckets.len(),
            included: buckets.len() >= min_buckets,
        })
        .collect();

    let kept = scores
        .into_iter()
        .filter(|s| present.get(&s.key).is_some_and(|b| b.len() >= min_buckets))
        .collect();

    (kept, coverage)
}

/// Combines bucket scores into one index per country-year: the weighted mean
/// over the buckets present, divided by the sum of their weights. A
/// country-year whose present buckets all weigh zero has no index.
pub fn combine(scores: &[BucketScore], weights: &BTreeMap<String, f64>) -> Vec<IndexRow> {
    let mut groups: BTreeMap<&CountryYear, Vec<(f64, f64)>> = BTreeMap::new();

    for s in scores {
        let Some(weight) = weights.get(&s.bucket) else {
            warn!(bucket = %s.bucket, "Bucket has no weight, ignoring its score");
            continue;
        };
        groups.entry(&s.key).or_default().push((s.bucket_score, *weight));
    }

    groups
        .into_iter()
        .filter_map(|(key, pairs)| {
            let Some(index) = weighted_mean(&pairs) else {
                warn!(
                    country_iso3 = %key.country_iso3,
                    year = key.year,
                    buckets = pairs.len(),
                    "All present buckets have zero weight, country-year left out of the index"
                );
                return None;
            };
            Some(IndexRow {
                country_iso3: key.country_iso3.clone(),
                country_name: key.country_name.clone(),
                year: key.year,
                inequity_index: index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_score_is_unweighted_mean() {
        let obs = vec![
            observation("KEN", 2020, "Learning", "read", 0.2),
            observation("KEN", 2020, "Learning", "math", 0.6),
            observation("KEN", 2020, "Teachers", "prim", 1.0),
        ];

        let scores = bucket_scores(&obs);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].bucket, "Learning");
        assert!((scores[0].bucket_score - 0.4).abs() < 1e-12);
        assert_eq!(scores[1].bucket_score, 1.0);
    }

    #[test]
    fn test_coverage_gate_boundary() {
        let scores = vec![
            score("KEN", 2020, "Learning", 0.5),
            score("KEN", 2020, "Teachers", 0.5),
            score("GHA", 2020, "Learning", 0.9),
        ];

        let (kept, coverage) = apply_coverage_gate(scores, MIN_BUCKETS);

        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|s| s.key.country_iso3 == "KEN"));

        let gha = coverage.iter().find(|c| c.country_iso3 == "GHA").unwrap();
        assert_eq!(gha.n_buckets, 1);
        assert!(!gha.included);
        let ken = coverage.iter().find(|c| c.country_iso3 == "KEN").unwrap();
        assert_eq!(ken.n_buckets, 2);
        assert!(ken.included);
    }

    #[test]
    fn test_coverage_counts_distinct_buckets_per_year() {
        let scores = vec![
            score("KEN", 2019, "Learning", 0.5),
            score("KEN", 2020, "Teachers", 0.5),
        ];

        let (kept, coverage) = apply_coverage_gate(scores, MIN_BUCKETS);

        assert!(kept.is_empty());
        assert_eq!(coverage.len(), 2);
    }

    #[test]
    fn test_combine_divides_by_present_weights() {
        let weights = equal_weights(&["A", "B", "C", "D"]);
        let scores = vec![score("KEN", 2020, "A", 0.2), score("KEN", 2020, "B", 0.8)];

        let rows = combine(&scores, &weights);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].inequity_index - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_combine_respects_unequal_weights() {
        let weights: BTreeMap<String, f64> =
            [("A".to_string(), 0.75), ("B".to_string(), 0.25)].into_iter().collect();
        let scores = vec![score("KEN", 2020, "A", 1.0), score("KEN", 2020, "B", 0.0)];

        let rows = combine(&scores, &weights);

        assert!((rows[0].inequity_index - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_combine_skips_country_years_with_zero_weight() {
        let weights: BTreeMap<String, f64> =
            [("A".to_string(), 0.0), ("B".to_string(), 0.0), ("C".to_string(), 1.0)]
                .into_iter()
                .collect();
        let scores = vec![
            score("GHA", 2020, "A", 0.4),
            score("GHA", 2020, "C", 0.8),
            score("KEN", 2020, "A", 0.2),
            score("KEN", 2020, "B", 0.8),
        ];

        let rows = combine(&scores, &weights);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country_iso3, "GHA");
        assert!((rows[0].inequity_index - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_combine_orders_rows_by_country_and_year() {
        let weights = equal_weights(&["A"]);
        let scores = vec![
            score("ZMB", 2016, "A", 0.1),
            score("AGO", 2017, "A", 0.2),
            score("AGO", 2016, "A", 0.3),
        ];

        let rows = combine(&scores, &weights);
        let keys: Vec<_> = rows.iter().map(|r| (r.country_iso3.as_str(), r.year)).collect();

        assert_eq!(keys, vec![("AGO", 2016), ("AGO", 2017), ("ZMB", 2016)]);
    }

    // Helper functions for tests
    fn key(iso3: &str, year: i32) -> CountryYear {
        CountryYear {
            country_iso3: iso3.to_string(),
            country_name: format!("{} name", iso3),
            year,
        }
    }

    fn observation(
        iso3: &str,
        year: i32,
        bucket: &str,
        indicator: &str,
        norm: f64,
    ) -> NormalizedObservation {
        NormalizedObservation {
            key: key(iso3, year),
            indicator_id: indicator.to_string(),
            bucket: bucket.to_string(),
            value: Some(norm),
            norm,
        }
    }

    fn score(iso3: &str, year: i32, bucket: &str, bucket_score: f64) -> BucketScore {
        BucketScore {
            key: key(iso3, year),
            bucket: bucket.to_string(),
            bucket_score,
        }
    }

    fn equal_weights(buckets: &[&str]) -> BTreeMap<String, f64> {
        let w = 1.0 / buckets.len() as f64;
        buckets.iter().map(|b| (b.to_string(), w)).collect()
    }
}

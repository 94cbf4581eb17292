//! Indicator catalog: which indicators feed the index, where their raw data
//! comes from, which bucket they belong to and how they are scored.
//!
//! The compiled-in [`Catalog::default`] covers the SDG 4 indicators. A JSON
//! file with the same shape can replace it:
//! ```json
//! {
//!   "indicators": [
//!     { "id": "SDG_4.5.1_GPI_SEC", "alias": "Equity_gender_parity",
//!       "bucket": "Equity", "unit": "ratio",
//!       "source": { "kind": "unesco", "stem": "SDG_4.5.1_GPI_SEC" },
//!       "transform": { "kind": "target", "value": 1.0 } }
//!   ]
//! }
//! ```
//! When `weights` is omitted every bucket gets `1 / number_of_buckets`.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Tolerance used when checking that bucket weights sum to one.
const WEIGHT_EPSILON: f64 = 1e-9;

/// How raw values are mapped onto a "higher is better" scale before min-max
/// scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    HigherIsBetter,
    LowerIsBetter,
    /// Closeness to `value` is better: scored as `1 - |v - value|`.
    Target { value: f64 },
}

/// Where the raw file for an indicator lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawSource {
    /// `raw/wb_<id>.zip` from the World Bank bulk download.
    WorldBank,
    /// `raw/unesco/<stem>.{xlsx,xls,csv}`.
    Unesco { stem: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub id: String,
    pub alias: String,
    pub bucket: String,
    pub unit: String,
    pub source: RawSource,
    pub transform: Transform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub indicators: Vec<IndicatorSpec>,
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,
}

impl Catalog {
    /// Loads and validates a catalog from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Bucket names in first-seen order.
    pub fn buckets(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for spec in &self.indicators {
            if !out.contains(&spec.bucket.as_str()) {
                out.push(&spec.bucket);
            }
        }
        out
    }

    /// Weight of each bucket; equal weighting unless configured.
    pub fn weights(&self) -> BTreeMap<String, f64> {
        match &self.weights {
            Some(w) => w.clone(),
            None => {
                let buckets = self.buckets();
                let w = 1.0 / buckets.len().max(1) as f64;
                buckets.into_iter().map(|b| (b.to_string(), w)).collect()
            }
        }
    }

    pub fn get(&self, indicator_id: &str) -> Option<&IndicatorSpec> {
        self.indicators.iter().find(|s| s.id == indicator_id)
    }

    /// Checks ids are unique, every bucket has a non-negative weight and the
    /// weights sum to one.
    pub fn validate(&self) -> Result<()> {
        if self.indicators.is_empty() {
            bail!("Catalog defines no indicators");
        }

        for (i, spec) in self.indicators.iter().enumerate() {
            if self.indicators[..i].iter().any(|s| s.id == spec.id) {
                bail!("Duplicate indicator id {:?} in catalog", spec.id);
            }
        }

        let weights = self.weights();
        let buckets = self.buckets();
        for bucket in &buckets {
            match weights.get(*bucket) {
                Some(w) if *w >= 0.0 => {}
                Some(w) => bail!("Bucket {:?} has negative weight {}", bucket, w),
                None => bail!("Bucket {:?} has no weight", bucket),
            }
        }
        for name in weights.keys() {
            if !buckets.contains(&name.as_str()) {
                bail!("Weight given for unknown bucket {:?}", name);
            }
        }

        let total: f64 = weights.values().sum();
        if (total - 1.0).abs() > WEIGHT_EPSILON {
            bail!("Bucket weights sum to {}, expected 1", total);
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let spec = |id: &str, alias: &str, bucket: &str, unit: &str, source, transform| {
            IndicatorSpec {
                id: id.to_string(),
                alias: alias.to_string(),
                bucket: bucket.to_string(),
                unit: unit.to_string(),
                source,
                transform,
            }
        };
        let unesco = |stem: &str| RawSource::Unesco {
            stem: stem.to_string(),
        };

        Catalog {
            indicators: vec![
                spec(
                    "SDG_4.1.1_read",
                    "Learning_proficiency",
                    "Learning",
                    "percent",
                    unesco("SDG_4.1.1_read"),
                    Transform::HigherIsBetter,
                ),
                spec(
                    "SDG_4.2.2",
                    "EarlyChildhood_participation",
                    "EarlyChildhood",
                    "percent",
                    unesco("SDG_4.2.2"),
                    Transform::HigherIsBetter,
                ),
                spec(
                    "SE.PRM.CMPT.ZS",
                    "Participation_completion",
                    "Participation",
                    "percent",
                    RawSource::WorldBank,
                    Transform::HigherIsBetter,
                ),
                // gender parity: ideal is 1, not the maximum
                spec(
                    "SDG_4.5.1_GPI_SEC",
                    "Equity_gender_parity",
                    "Equity",
                    "ratio",
                    unesco("SDG_4.5.1_GPI_SEC"),
                    Transform::Target { value: 1.0 },
                ),
                spec(
                    "SDG_4.a.1_elec",
                    "Infrastructure_electricity",
                    "Infrastructure",
                    "percent",
                    unesco("SDG_4.a.1_elec"),
                    Transform::HigherIsBetter,
                ),
                spec(
                    "SDG_4.c.1_prim",
                    "Teachers_trained",
                    "Teachers",
                    "percent",
                    unesco("SDG_4.c.1_prim"),
                    Transform::HigherIsBetter,
                ),
            ],
            weights: None,
        }
    }
}

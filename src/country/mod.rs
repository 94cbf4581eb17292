//! Country identifier resolution.
//!
//! [`CountryResolver`] maps free-text names or codes onto canonical ISO3
//! codes. Anything that is not a country (regional or income aggregates such
//! as "World" or "Sub-Saharan Africa") resolves to `None` and must be dropped
//! by the caller.
//!
//! Unresolved identifiers are reported at `debug` level under the
//! `country_resolver` target, so they reach the structured log file without
//! cluttering the console.

mod codes;

use codes::COUNTRIES;
use std::collections::HashMap;
use tracing::debug;

/// Resolves country identifiers to ISO3 codes.
pub trait CountryResolver {
    /// Returns one entry per identifier, `None` where it is not a country.
    fn resolve(&self, identifiers: &[String]) -> Vec<Option<String>>;

    fn resolve_one(&self, identifier: &str) -> Option<String> {
        self.resolve(&[identifier.to_string()]).pop().flatten()
    }
}

/// Resolver backed by a compiled-in ISO 3166-1 table.
pub struct StaticCountryResolver {
    by_code: HashMap<&'static str, &'static str>,
    by_numeric: HashMap<u16, &'static str>,
    by_name: HashMap<String, &'static str>,
}

impl StaticCountryResolver {
    pub fn new() -> Self {
        let mut by_code = HashMap::new();
        let mut by_numeric = HashMap::new();
        let mut by_name = HashMap::new();

        for country in COUNTRIES {
            by_code.insert(country.iso3, country.iso3);
            if let Some(n) = country.numeric {
                by_numeric.insert(n, country.iso3);
            }
            by_name.insert(fold_name(country.name), country.iso3);
            for alias in country.aliases {
                by_name.insert(fold_name(alias), country.iso3);
            }
        }

        Self {
            by_code,
            by_numeric,
            by_name,
        }
    }

    fn lookup(&self, identifier: &str) -> Option<&'static str> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            if let Some(code) = self.by_code.get(trimmed.to_ascii_uppercase().as_str()) {
                return Some(code);
            }
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return trimmed
                .parse::<u16>()
                .ok()
                .and_then(|n| self.by_numeric.get(&n).copied());
        }

        self.by_name.get(&fold_name(trimmed)).copied()
    }
}

impl Default for StaticCountryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryResolver for StaticCountryResolver {
    fn resolve(&self, identifiers: &[String]) -> Vec<Option<String>> {
        identifiers
            .iter()
            .map(|id| {
                let resolved = self.lookup(id).map(str::to_string);
                if resolved.is_none() {
                    debug!(
                        target: "country_resolver",
                        identifier = %id,
                        "not a recognized country"
                    );
                }
                resolved
            })
            .collect()
    }
}

/// Lowercases, strips diacritics and collapses punctuation to single spaces.
fn fold_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        let ch = match ch {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            '&' => {
                pending_space = !out.is_empty();
                out.push_str(if pending_space { " and" } else { "and" });
                pending_space = true;
                continue;
            }
            c => c,
        };

        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }

    out.strip_prefix("the ").map(str::to_string).unwrap_or(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_resolves_codes_names_and_numbers() {
        let resolver = StaticCountryResolver::new();
        let out = resolver.resolve(&ids(&["KEN", "fra", "Viet Nam", "004", "76"]));

        assert_eq!(
            out,
            vec![
                Some("KEN".to_string()),
                Some("FRA".to_string()),
                Some("VNM".to_string()),
                Some("AFG".to_string()),
                Some("BRA".to_string()),
            ]
        );
    }

    #[test]
    fn test_name_variants_fold_to_same_code() {
        let resolver = StaticCountryResolver::new();

        assert_eq!(resolver.resolve_one("Côte d'Ivoire").as_deref(), Some("CIV"));
        assert_eq!(resolver.resolve_one("Cote d'Ivoire").as_deref(), Some("CIV"));
        assert_eq!(resolver.resolve_one("  türkiye ").as_deref(), Some("TUR"));
        assert_eq!(resolver.resolve_one("Bahamas, The").as_deref(), Some("BHS"));
        assert_eq!(resolver.resolve_one("Congo, Dem. Rep.").as_deref(), Some("COD"));
        assert_eq!(resolver.resolve_one("Congo").as_deref(), Some("COG"));
        assert_eq!(
            resolver.resolve_one("Bolivia (Plurinational State of)").as_deref(),
            Some("BOL")
        );
        assert_eq!(resolver.resolve_one("Antigua & Barbuda").as_deref(), Some("ATG"));
    }

    #[test]
    fn test_regional_aggregates_do_not_resolve() {
        let resolver = StaticCountryResolver::new();
        let aggregates = ids(&[
            "World",
            "Sub-Saharan Africa",
            "Europe",
            "Latin America and the Caribbean",
            "Low income",
            "1",
            "202",
            "",
            "nan",
        ]);

        assert!(resolver.resolve(&aggregates).iter().all(Option::is_none));
    }

    #[test]
    fn test_world_bank_aggregate_codes_do_not_resolve() {
        let resolver = StaticCountryResolver::new();
        let codes = ids(&[
            "AFE", "AFW", "ARB", "CEB", "CSS", "EAP", "EAR", "EAS", "ECA", "ECS", "EMU", "EUU",
            "FCS", "HIC", "HPC", "IBD", "IBT", "IDA", "IDB", "IDX", "INX", "LAC", "LCN", "LDC",
            "LIC", "LMC", "LMY", "LTE", "MEA", "MIC", "MNA", "NAC", "OED", "OSS", "PRE", "PSS",
            "PST", "SAS", "SSA", "SSF", "SST", "TEA", "TEC", "TLA", "TMN", "TSA", "TSS", "UMC",
            "WLD",
        ]);

        assert!(resolver.resolve(&codes).iter().all(Option::is_none));
    }

    #[test]
    fn test_output_length_matches_input() {
        let resolver = StaticCountryResolver::new();
        let input = ids(&["World", "KEN", "Sub-Saharan Africa"]);
        let out = resolver.resolve(&input);

        assert_eq!(out.len(), 3);
        assert_eq!(out[1].as_deref(), Some("KEN"));
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for country in COUNTRIES {
            assert!(seen.insert(country.iso3), "duplicate {}", country.iso3);
        }

        let mut numerics = std::collections::HashSet::new();
        for n in COUNTRIES.iter().filter_map(|c| c.numeric) {
            assert!(numerics.insert(n), "duplicate numeric {}", n);
        }
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name("Korea, Dem. People's Rep."), "korea dem people s rep");
        assert_eq!(fold_name("The Gambia"), "gambia");
        assert_eq!(fold_name("Réunion"), "reunion");
        assert_eq!(fold_name("Trinidad & Tobago"), "trinidad and tobago");
    }
}

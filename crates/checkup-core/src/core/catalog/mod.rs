//! The screening catalog: the ordered, immutable set of rules the engine selects from.
//!
//! The builtin catalog is authored in [`builtin`] and materialized once per process by
//! [`Catalog::builtin`]. Custom catalogs are read from TOML files with [`Catalog::load`]
//! and go through the same invariant checks as any other rule set.
//!
//! ```ignore
//! use checkup::core::catalog::Catalog;
//!
//! let catalog = Catalog::load(Path::new("catalog.toml"))?;
//! let bp = catalog.get("bp").unwrap();
//! ```

mod builtin;

use crate::core::models::rule::{MAX_AGE, ScreeningRule};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::info;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let rules = builtin::BUILTIN_RULES
        .iter()
        .map(|(id, spec)| spec.to_rule(id))
        .collect();
    Catalog::from_rules_unchecked(rules)
});

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rules: Vec<ScreeningRule>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(rename = "rule", default)]
    rules: Vec<ScreeningRule>,
}

impl Catalog {
    /// The authored catalog, shared process-wide.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Builds a catalog after checking id uniqueness and age-bound sanity.
    pub fn from_rules(rules: Vec<ScreeningRule>) -> Result<Self, CatalogError> {
        for rule in &rules {
            validate_rule(rule)?;
        }
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            if index.insert(rule.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(rule.id.clone()));
            }
        }
        Ok(Self { rules, index })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| CatalogError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let catalog = Self::from_rules(file.rules)?;
        info!(
            "Loaded catalog with {} rule(s) from {:?}",
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    /// All rules in authored order. Returns the same slice on every call.
    pub fn all_rules(&self) -> &[ScreeningRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&ScreeningRule> {
        self.index.get(id).map(|&position| &self.rules[position])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn from_rules_unchecked(rules: Vec<ScreeningRule>) -> Self {
        let index = rules
            .iter()
            .enumerate()
            .map(|(position, rule)| (rule.id.clone(), position))
            .collect();
        Self { rules, index }
    }
}

fn validate_rule(rule: &ScreeningRule) -> Result<(), CatalogError> {
    if rule.id.trim().is_empty() {
        return Err(CatalogError::EmptyId {
            name: rule.name.clone(),
        });
    }
    for bound in [rule.min_age, rule.max_age].into_iter().flatten() {
        if bound > MAX_AGE {
            return Err(CatalogError::BoundOutOfRange {
                id: rule.id.clone(),
                bound,
            });
        }
    }
    if let (Some(min), Some(max)) = (rule.min_age, rule.max_age) {
        if min > max {
            return Err(CatalogError::InvertedAgeRange {
                id: rule.id.clone(),
                min,
                max,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Rule '{name}' has an empty id")]
    EmptyId { name: String },
    #[error("Duplicate rule id: '{0}'")]
    DuplicateId(String),
    #[error("Rule '{id}' has min-age {min} greater than max-age {max}")]
    InvertedAgeRange { id: String, min: u32, max: u32 },
    #[error("Rule '{id}' has an age bound of {bound}, above the maximum of 120")]
    BoundOutOfRange { id: String, bound: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sex::ApplicableSex;
    use crate::core::models::urgency::Urgency;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    fn rule(id: &str, min_age: Option<u32>, max_age: Option<u32>) -> ScreeningRule {
        ScreeningRule {
            id: id.to_string(),
            name: format!("Rule {}", id),
            applicable_sex: ApplicableSex::All,
            min_age,
            max_age,
            frequency_long: "Every year".to_string(),
            frequency_short: "1x/year".to_string(),
            urgency: Urgency::Low,
            rationale: "Test".to_string(),
            notes: Vec::new(),
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn builtin_catalog_has_thirteen_rules_in_authored_order() {
        let ids: Vec<&str> = Catalog::builtin()
            .all_rules()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "bp", "bmi", "lipids", "glucose", "hiv_hcv", "cervical", "breast", "prostate",
                "crc", "bone", "vision", "dental", "vaccines"
            ]
        );
    }

    #[test]
    fn builtin_catalog_satisfies_its_own_invariants() {
        let rules = Catalog::builtin().all_rules().to_vec();
        assert!(Catalog::from_rules(rules).is_ok());
    }

    #[test]
    fn builtin_catalog_is_the_same_instance_on_every_call() {
        let first = Catalog::builtin();
        let second = Catalog::builtin();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first.all_rules(), second.all_rules()));
    }

    #[test]
    fn builtin_rules_have_the_authored_sex_bounds_and_urgency() {
        let catalog = Catalog::builtin();
        let expect = |id: &str,
                      sex: ApplicableSex,
                      min: Option<u32>,
                      max: Option<u32>,
                      urgency: Urgency| {
            let r = catalog.get(id).unwrap();
            assert_eq!(r.applicable_sex, sex, "sex of {}", id);
            assert_eq!(r.min_age, min, "min-age of {}", id);
            assert_eq!(r.max_age, max, "max-age of {}", id);
            assert_eq!(r.urgency, urgency, "urgency of {}", id);
        };
        expect("bp", ApplicableSex::All, Some(18), None, Urgency::High);
        expect("bmi", ApplicableSex::All, Some(16), None, Urgency::Medium);
        expect("lipids", ApplicableSex::All, Some(20), None, Urgency::Medium);
        expect("glucose", ApplicableSex::All, Some(35), None, Urgency::Medium);
        expect("hiv_hcv", ApplicableSex::All, Some(16), None, Urgency::Medium);
        expect("cervical", ApplicableSex::Female, Some(25), Some(64), Urgency::High);
        expect("breast", ApplicableSex::Female, Some(50), Some(69), Urgency::High);
        expect("prostate", ApplicableSex::Male, Some(50), None, Urgency::Low);
        expect("crc", ApplicableSex::All, Some(50), None, Urgency::High);
        expect("bone", ApplicableSex::Female, Some(65), None, Urgency::Medium);
        expect("vision", ApplicableSex::All, Some(18), None, Urgency::Low);
        expect("dental", ApplicableSex::All, Some(1), None, Urgency::Medium);
        expect("vaccines", ApplicableSex::All, Some(0), None, Urgency::Medium);
    }

    #[test]
    fn prostate_rule_carries_its_notes() {
        let prostate = Catalog::builtin().get("prostate").unwrap();
        assert_eq!(prostate.notes.len(), 2);
        assert!(prostate.tags.contains("cancer"));
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        assert!(Catalog::builtin().get("xray").is_none());
    }

    #[test]
    fn from_rules_rejects_duplicate_ids() {
        let result = Catalog::from_rules(vec![rule("a", None, None), rule("a", Some(1), None)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn from_rules_rejects_inverted_age_range() {
        let result = Catalog::from_rules(vec![rule("a", Some(50), Some(40))]);
        assert!(matches!(
            result,
            Err(CatalogError::InvertedAgeRange { min: 50, max: 40, .. })
        ));
    }

    #[test]
    fn from_rules_accepts_equal_bounds() {
        let catalog = Catalog::from_rules(vec![rule("a", Some(40), Some(40))]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn from_rules_rejects_empty_id_and_bounds_above_max_age() {
        assert!(matches!(
            Catalog::from_rules(vec![rule(" ", None, None)]),
            Err(CatalogError::EmptyId { .. })
        ));
        assert!(matches!(
            Catalog::from_rules(vec![rule("a", None, Some(130))]),
            Err(CatalogError::BoundOutOfRange { bound: 130, .. })
        ));
    }

    #[test]
    fn from_rules_accepts_an_empty_rule_set() {
        let catalog = Catalog::from_rules(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.all_rules().is_empty());
    }

    #[test]
    fn load_reads_rules_from_toml_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
            [[rule]]
            id = "hearing"
            name = "Hearing test"
            applicable-sex = "all"
            min-age = 60
            frequency-long = "Every 3 years"
            frequency-short = "3 years"
            urgency = "low"
            rationale = "Hearing loss is common and treatable."
            tags = ["general"]

            [[rule]]
            id = "aaa"
            name = "Abdominal aortic aneurysm scan"
            applicable-sex = "male"
            min-age = 65
            max-age = 75
            frequency-long = "Once"
            frequency-short = "1x"
            urgency = "medium"
            rationale = "Aneurysms are silent until they rupture."
            notes = ["Only for current or former smokers in some programmes."]
            "#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all_rules()[0].id, "hearing");
        let aaa = catalog.get("aaa").unwrap();
        assert_eq!(aaa.applicable_sex, ApplicableSex::Male);
        assert_eq!(aaa.max_age, Some(75));
        assert_eq!(aaa.notes.len(), 1);
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_reports_malformed_toml_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[rule]]\nid = \"x\"\n").unwrap();
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_applies_invariant_checks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.toml");
        let entry = r#"
            [[rule]]
            id = "x"
            name = "X"
            applicable-sex = "female"
            frequency-long = "yearly"
            frequency-short = "1x/year"
            urgency = "high"
            rationale = "r"
        "#;
        fs::write(&path, format!("{}{}", entry, entry)).unwrap();
        assert!(matches!(
            Catalog::load(&path),
            Err(CatalogError::DuplicateId(_))
        ));
    }
}

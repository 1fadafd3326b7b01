use crate::core::catalog::Catalog;
use crate::core::models::rule::ScreeningRule;
use crate::core::models::sex::Sex;
use crate::engine::age::{Age, validate_age};
use crate::engine::error::AgeError;
use crate::engine::partition::{UrgencyBuckets, UrgencyCounts, partition};
use crate::engine::recommend::recommend;
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// What the user entered for one interaction. Not stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub age_raw: String,
    pub sex: Sex,
}

impl UserQuery {
    pub fn new(age_raw: impl Into<String>, sex: Sex) -> Self {
        Self {
            age_raw: age_raw.into(),
            sex,
        }
    }
}

/// Screenings recommended for one query, borrowed from the catalog they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation<'a> {
    pub age: Age,
    pub sex: Sex,
    pub rules: Vec<&'a ScreeningRule>,
    pub buckets: UrgencyBuckets<'a>,
}

impl Recommendation<'_> {
    pub fn counts(&self) -> UrgencyCounts {
        self.buckets.counts()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Validates the query and, only if the age is usable, computes its recommendation.
#[instrument(skip_all, name = "recommendation_workflow", fields(sex = %query.sex))]
pub fn run<'a>(catalog: &'a Catalog, query: &UserQuery) -> Result<Recommendation<'a>, AgeError> {
    let age = validate_age(&query.age_raw)?;
    debug!("Age input {:?} validated as {}.", query.age_raw, age);

    let rules = recommend(catalog, age, query.sex);
    trace!(
        "Matched rules: {:?}",
        rules.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );

    let buckets = partition(&rules);
    let counts = buckets.counts();
    debug!(
        "Recommended {} of {} screening(s): {} high, {} medium, {} low.",
        rules.len(),
        catalog.len(),
        counts.high,
        counts.medium,
        counts.low
    );

    Ok(Recommendation {
        age,
        sex: query.sex,
        rules,
        buckets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::urgency::Urgency;

    fn ids(recommendation: &Recommendation) -> Vec<String> {
        recommendation.rules.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_age_is_rejected_before_recommending() {
        let query = UserQuery::new("", Sex::Female);
        assert_eq!(run(Catalog::builtin(), &query), Err(AgeError::Empty));
    }

    #[test]
    fn out_of_range_age_is_rejected_before_recommending() {
        for raw in ["121", "200", "abc"] {
            let query = UserQuery::new(raw, Sex::Male);
            assert!(
                matches!(
                    run(Catalog::builtin(), &query),
                    Err(AgeError::OutOfRange { .. })
                ),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn thirty_year_old_female_recommendation_is_grouped_by_urgency() {
        let query = UserQuery::new("30", Sex::Female);
        let recommendation = run(Catalog::builtin(), &query).unwrap();

        assert_eq!(recommendation.age.get(), 30);
        assert_eq!(recommendation.sex, Sex::Female);
        for included in ["bp", "bmi", "lipids", "hiv_hcv", "vision", "dental", "vaccines", "cervical"] {
            assert!(ids(&recommendation).iter().any(|id| id == included), "{}", included);
        }
        for excluded in ["glucose", "breast", "crc", "bone", "prostate"] {
            assert!(!ids(&recommendation).iter().any(|id| id == excluded), "{}", excluded);
        }

        let counts = recommendation.counts();
        assert_eq!((counts.high, counts.medium, counts.low), (2, 5, 1));
        assert_eq!(recommendation.buckets.get(Urgency::High)[1].id, "cervical");
    }

    #[test]
    fn sixty_year_old_male_recommendation_excludes_female_screenings() {
        let query = UserQuery::new("60", Sex::Male);
        let recommendation = run(Catalog::builtin(), &query).unwrap();
        let got = ids(&recommendation);

        for included in [
            "bp", "bmi", "lipids", "glucose", "hiv_hcv", "crc", "prostate", "vision", "dental",
            "vaccines",
        ] {
            assert!(got.iter().any(|id| id == included), "{}", included);
        }
        for excluded in ["cervical", "breast", "bone"] {
            assert!(!got.iter().any(|id| id == excluded), "{}", excluded);
        }
        assert_eq!(got.len(), 10);
    }

    #[test]
    fn lenient_input_is_stripped_to_its_digits() {
        let query = UserQuery::new("4a2", Sex::Female);
        let recommendation = run(Catalog::builtin(), &query).unwrap();
        assert_eq!(recommendation.age.get(), 42);
    }

    #[test]
    fn recommendation_serializes_rules_and_buckets() {
        let query = UserQuery::new("0", Sex::Male);
        let recommendation = run(Catalog::builtin(), &query).unwrap();
        assert!(!recommendation.is_empty());

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["age"], 0);
        assert_eq!(json["sex"], "male");
        assert_eq!(json["rules"][0]["id"], "vaccines");
        assert_eq!(json["rules"][0]["urgency"], "medium");
        assert_eq!(json["buckets"]["medium"].as_array().unwrap().len(), 1);
        assert!(json["buckets"]["high"].as_array().unwrap().is_empty());
    }
}

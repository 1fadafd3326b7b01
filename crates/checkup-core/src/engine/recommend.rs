use super::age::Age;
use super::eligibility::is_eligible;
use crate::core::catalog::Catalog;
use crate::core::models::rule::ScreeningRule;
use crate::core::models::sex::Sex;

/// Selects the rules that apply to `age` and `sex`, most urgent first.
///
/// The sort is stable: rules sharing an urgency tier keep their catalog order.
/// An empty result is a valid answer, not an error.
pub fn recommend(catalog: &Catalog, age: Age, sex: Sex) -> Vec<&ScreeningRule> {
    let mut matching: Vec<&ScreeningRule> = catalog
        .all_rules()
        .iter()
        .filter(|rule| is_eligible(rule, age, sex))
        .collect();
    matching.sort_by_key(|rule| rule.urgency);
    matching
}

use super::age::Age;
use crate::core::models::rule::ScreeningRule;
use crate::core::models::sex::Sex;

/// True when the rule is written for everyone or for this sex.
pub fn matches_sex(rule: &ScreeningRule, sex: Sex) -> bool {
    rule.applicable_sex.includes(sex)
}

/// True when the age lies within the rule's inclusive bounds. Absent bounds do not constrain.
pub fn in_age_range(rule: &ScreeningRule, age: Age) -> bool {
    let years = age.get();
    let above_min = rule.min_age.is_none_or(|min| years >= min);
    let below_max = rule.max_age.is_none_or(|max| years <= max);
    above_min && below_max
}

pub fn is_eligible(rule: &ScreeningRule, age: Age, sex: Sex) -> bool {
    matches_sex(rule, sex) && in_age_range(rule, age)
}

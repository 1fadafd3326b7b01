use crate::core::models::rule::ScreeningRule;
use crate::core::models::sex::ApplicableSex;
use crate::core::models::urgency::Urgency;

/// Authored form of a rule, kept in static memory next to its id.
pub(super) struct RuleSpec {
    name: &'static str,
    applicable_sex: ApplicableSex,
    min_age: Option<u32>,
    max_age: Option<u32>,
    frequency_long: &'static str,
    frequency_short: &'static str,
    urgency: Urgency,
    rationale: &'static str,
    notes: &'static [&'static str],
    tags: &'static [&'static str],
}

impl RuleSpec {
    pub(super) fn to_rule(&self, id: &str) -> ScreeningRule {
        ScreeningRule {
            id: id.to_string(),
            name: self.name.to_string(),
            applicable_sex: self.applicable_sex,
            min_age: self.min_age,
            max_age: self.max_age,
            frequency_long: self.frequency_long.to_string(),
            frequency_short: self.frequency_short.to_string(),
            urgency: self.urgency,
            rationale: self.rationale.to_string(),
            notes: self.notes.iter().map(|n| n.to_string()).collect(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

// Order within an urgency tier is presentation priority; keep it stable.
#[rustfmt::skip]
pub(super) static BUILTIN_RULES: &[(&str, RuleSpec)] = &[
    ("bp", RuleSpec {
        name: "Blood pressure measurement",
        applicable_sex: ApplicableSex::All,
        min_age: Some(18),
        max_age: None,
        frequency_long: "At least once a year (or as advised by your doctor)",
        frequency_short: "1x/year",
        urgency: Urgency::High,
        rationale: "Hypertension is often silent and raises the risk of stroke and heart attack.",
        notes: &[],
        tags: &["cardiovascular"],
    }),
    ("bmi", RuleSpec {
        name: "BMI and waist circumference",
        applicable_sex: ApplicableSex::All,
        min_age: Some(16),
        max_age: None,
        frequency_long: "Once a year",
        frequency_short: "1x/year",
        urgency: Urgency::Medium,
        rationale: "Helps estimate metabolic and cardiovascular risk.",
        notes: &[],
        tags: &["metabolic"],
    }),
    ("lipids", RuleSpec {
        name: "Cholesterol (lipid profile)",
        applicable_sex: ApplicableSex::All,
        min_age: Some(20),
        max_age: None,
        frequency_long: "Every 4 to 6 years (earlier if at risk)",
        frequency_short: "4-6 years",
        urgency: Urgency::Medium,
        rationale: "High cholesterol raises cardiovascular risk; screening allows early intervention.",
        notes: &[],
        tags: &["cardiovascular"],
    }),
    ("glucose", RuleSpec {
        name: "Blood glucose / HbA1c (diabetes)",
        applicable_sex: ApplicableSex::All,
        min_age: Some(35),
        max_age: None,
        frequency_long: "Every 3 years (more often if at risk)",
        frequency_short: "3 years",
        urgency: Urgency::Medium,
        rationale: "Detecting prediabetes or diabetes early reduces complications (kidneys, eyes, nerves).",
        notes: &[],
        tags: &["metabolic"],
    }),
    ("hiv_hcv", RuleSpec {
        name: "HIV and hepatitis screening (risk-based)",
        applicable_sex: ApplicableSex::All,
        min_age: Some(16),
        max_age: None,
        frequency_long: "At least once in a lifetime; repeat if at risk",
        frequency_short: "1x lifetime / risk",
        urgency: Urgency::Medium,
        rationale: "Some infections are asymptomatic and treatable; screening depends on exposure and context.",
        notes: &[],
        tags: &["infections"],
    }),
    ("cervical", RuleSpec {
        name: "Cervical cancer screening (Pap/HPV)",
        applicable_sex: ApplicableSex::Female,
        min_age: Some(25),
        max_age: Some(64),
        frequency_long: "According to the local programme (e.g. HPV test every 5 years)",
        frequency_short: "3-5 years",
        urgency: Urgency::High,
        rationale: "Screening greatly reduces the risk of cervical cancer by detecting early lesions.",
        notes: &[],
        tags: &["cancer"],
    }),
    ("breast", RuleSpec {
        name: "Mammography (breast cancer screening)",
        applicable_sex: ApplicableSex::Female,
        min_age: Some(50),
        max_age: Some(69),
        frequency_long: "Usually every 2 years (varies by country and programme)",
        frequency_short: "2 years",
        urgency: Urgency::High,
        rationale: "Early detection can improve prognosis; the schedule depends on programmes and individual risk.",
        notes: &[],
        tags: &["cancer"],
    }),
    ("prostate", RuleSpec {
        name: "Prostate (PSA / evaluation), shared decision",
        applicable_sex: ApplicableSex::Male,
        min_age: Some(50),
        max_age: None,
        frequency_long: "Based on risk and an informed decision with your doctor",
        frequency_short: "Variable",
        urgency: Urgency::Low,
        rationale: "Screening has benefits and risks (false positives, overdiagnosis); discuss case by case.",
        notes: &[
            "Consider starting earlier with a family history or high risk.",
            "Urinary symptoms call for an evaluation, not a screening.",
        ],
        tags: &["cancer"],
    }),
    ("crc", RuleSpec {
        name: "Colorectal cancer screening (stool test / colonoscopy)",
        applicable_sex: ApplicableSex::All,
        min_age: Some(50),
        max_age: None,
        frequency_long: "According to the programme (e.g. yearly or biennial stool test, or colonoscopy every 10 years)",
        frequency_short: "1-2 years / 10 years",
        urgency: Urgency::High,
        rationale: "Can prevent cancer by finding and removing polyps, and diagnoses it early.",
        notes: &[],
        tags: &["cancer"],
    }),
    ("bone", RuleSpec {
        name: "Bone density scan (osteoporosis)",
        applicable_sex: ApplicableSex::Female,
        min_age: Some(65),
        max_age: None,
        frequency_long: "Based on risk (e.g. every 2 to 5 years)",
        frequency_short: "2-5 years",
        urgency: Urgency::Medium,
        rationale: "Helps identify fracture risk and guide prevention or treatment.",
        notes: &[],
        tags: &["bones"],
    }),
    ("vision", RuleSpec {
        name: "Vision check (optometry / ophthalmology)",
        applicable_sex: ApplicableSex::All,
        min_age: Some(18),
        max_age: None,
        frequency_long: "Every 1 to 2 years (or when symptoms appear)",
        frequency_short: "1-2 years",
        urgency: Urgency::Low,
        rationale: "Detects vision problems and some signs of eye disease (glaucoma, retinopathy when at risk).",
        notes: &[],
        tags: &["general"],
    }),
    ("dental", RuleSpec {
        name: "Oral health check-up (dentist)",
        applicable_sex: ApplicableSex::All,
        min_age: Some(1),
        max_age: None,
        frequency_long: "1 to 2 times a year",
        frequency_short: "6-12 months",
        urgency: Urgency::Medium,
        rationale: "Prevents cavities and periodontal disease, which are also linked to systemic problems.",
        notes: &[],
        tags: &["general"],
    }),
    ("vaccines", RuleSpec {
        name: "Vaccination record review",
        applicable_sex: ApplicableSex::All,
        min_age: Some(0),
        max_age: None,
        frequency_long: "At every appointment / according to the schedule",
        frequency_short: "Every visit",
        urgency: Urgency::Medium,
        rationale: "Up-to-date vaccines reduce the risk of serious infections; boosters may be needed.",
        notes: &[],
        tags: &["prevention"],
    }),
];

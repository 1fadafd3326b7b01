use checkup::core::models::rule::ScreeningRule;
use checkup::core::models::urgency::Urgency;
use checkup::engine::error::AgeError;
use checkup::workflows::recommend::Recommendation;
use serde::Serialize;
use std::io::{self, Write};

pub const ENTER_AGE_PROMPT: &str = "Enter an age to generate recommendations.";
pub const INVALID_AGE_MESSAGE: &str = "Invalid age. Use a value between 0 and 120.";
pub const NO_MATCHES_MESSAGE: &str =
    "No screenings in this list for this age and sex. If in doubt, talk to a health professional.";
pub const TIP: &str = "Tip: take this list to your appointment and confirm the screening schedule \
for your country, family history, medication and risk factors.";
pub const EMERGENCY_NOTICE: &str = "This tool does not provide a diagnosis. For chest pain, \
shortness of breath, neurological symptoms, significant bleeding or anything that feels urgent, \
seek medical help immediately.";

/// The message a user sees for an unusable age. Empty input is a prompt, not an error.
pub fn age_message(error: &AgeError) -> &'static str {
    match error {
        AgeError::Empty => ENTER_AGE_PROMPT,
        AgeError::OutOfRange { .. } => INVALID_AGE_MESSAGE,
    }
}

pub fn write_recommendation(
    out: &mut impl Write,
    recommendation: &Recommendation,
    show_notes: bool,
) -> io::Result<()> {
    if recommendation.is_empty() {
        writeln!(out, "{}", NO_MATCHES_MESSAGE)?;
        return Ok(());
    }

    writeln!(
        out,
        "Screenings for a {}-year-old {} ({} found)",
        recommendation.age,
        recommendation.sex,
        recommendation.rules.len()
    )?;
    writeln!(out)?;

    let counts = recommendation.counts();
    let summary: Vec<String> = Urgency::ALL
        .iter()
        .map(|&urgency| format!("{}: {}", urgency, counts.get(urgency)))
        .collect();
    writeln!(out, "  {}", summary.join("   "))?;

    for rule in &recommendation.rules {
        writeln!(out)?;
        write_rule(out, rule, show_notes)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", TIP)?;
    writeln!(out, "{}", EMERGENCY_NOTICE)?;
    Ok(())
}

pub fn write_rule(out: &mut impl Write, rule: &ScreeningRule, show_notes: bool) -> io::Result<()> {
    writeln!(out, "● {}  [{}]", rule.name, rule.urgency)?;
    writeln!(out, "  {}", rule.rationale)?;
    writeln!(
        out,
        "  Frequency: {} ({})",
        rule.frequency_short, rule.frequency_long
    )?;
    writeln!(out, "  Indicated for: {}", rule.audience())?;
    if show_notes {
        for note in &rule.notes {
            writeln!(out, "  - {}", note)?;
        }
    }
    Ok(())
}

pub fn write_rule_detail(out: &mut impl Write, rule: &ScreeningRule) -> io::Result<()> {
    writeln!(out, "id: {}", rule.id)?;
    write_rule(out, rule, true)?;
    if !rule.tags.is_empty() {
        let tags: Vec<&str> = rule.tags.iter().map(String::as_str).collect();
        writeln!(out, "  Tags: {}", tags.join(", "))?;
    }
    Ok(())
}

pub fn write_catalog_table<'a>(
    out: &mut impl Write,
    rules: impl IntoIterator<Item = &'a ScreeningRule>,
) -> io::Result<()> {
    writeln!(out, "{:<10} {:<7} {:<36} NAME", "ID", "URGENCY", "FOR")?;
    for rule in rules {
        writeln!(
            out,
            "{:<10} {:<7} {:<36} {}",
            rule.id,
            rule.urgency,
            rule.audience(),
            rule.name
        )?;
    }
    Ok(())
}

pub fn write_urgency_legend(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "How urgency is interpreted:")?;
    for urgency in Urgency::ALL {
        writeln!(out, "  {:<6}  {}", urgency.label(), urgency.guidance())?;
    }
    Ok(())
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    urgency: Urgency,
    frequency_short: &'a str,
    frequency: &'a str,
    min_age: Option<u32>,
    max_age: Option<u32>,
    applicable_sex: String,
}

impl<'a> From<&'a ScreeningRule> for CsvRow<'a> {
    fn from(rule: &'a ScreeningRule) -> Self {
        Self {
            id: &rule.id,
            name: &rule.name,
            urgency: rule.urgency,
            frequency_short: &rule.frequency_short,
            frequency: &rule.frequency_long,
            min_age: rule.min_age,
            max_age: rule.max_age,
            applicable_sex: rule.applicable_sex.to_string(),
        }
    }
}

pub fn write_csv<'a>(
    out: &mut impl Write,
    rules: impl IntoIterator<Item = &'a ScreeningRule>,
) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for rule in rules {
        writer.serialize(CsvRow::from(rule))?;
    }
    writer.flush()?;
    Ok(())
}

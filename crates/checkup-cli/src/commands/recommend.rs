use super::{load_catalog, resolve_config};
use crate::cli::RecommendArgs;
use crate::config::builder::ConfigOverrides;
use crate::config::models::OutputFormat;
use crate::error::Result;
use crate::ui;
use checkup::workflows::recommend::{self, UserQuery};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: RecommendArgs, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let overrides = ConfigOverrides {
        sex: args.sex,
        show_notes: args.no_notes.then_some(false),
        output: args.output,
    };
    let config = resolve_config(config_path, &overrides)?;
    let catalog = load_catalog(&config.catalog)?;

    let query = UserQuery::new(args.age.unwrap_or_default(), config.sex);
    info!("Computing recommendation for sex={}.", query.sex);
    let recommendation = recommend::run(&catalog, &query).inspect_err(|e| {
        debug!("Age input not usable: {}", e);
    })?;

    if recommendation.is_empty() {
        info!("No screenings matched age {} and sex {}.", recommendation.age, recommendation.sex);
    }

    match config.format {
        OutputFormat::Text => ui::write_recommendation(out, &recommendation, config.show_notes)?,
        OutputFormat::Json => ui::write_json(out, &recommendation)?,
        OutputFormat::Csv => ui::write_csv(out, recommendation.rules.iter().copied())?,
    }
    Ok(())
}

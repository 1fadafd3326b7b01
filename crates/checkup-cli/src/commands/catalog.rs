use super::{load_catalog, resolve_config};
use crate::cli::{CatalogArgs, CatalogCommands, OutputOverrides};
use crate::config::builder::ConfigOverrides;
use crate::config::models::OutputFormat;
use crate::error::{CliError, Result};
use crate::ui;
use checkup::core::catalog::Catalog;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: CatalogArgs, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match args.command {
        CatalogCommands::List { output } => handle_list(output, config_path, out),
        CatalogCommands::Show { id, output } => handle_show(&id, output, config_path, out),
        CatalogCommands::Check { path } => handle_check(path, out),
    }
}

fn handle_list(output: OutputOverrides, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let overrides = ConfigOverrides {
        output,
        ..Default::default()
    };
    let config = resolve_config(config_path, &overrides)?;
    let catalog = load_catalog(&config.catalog)?;

    match config.format {
        OutputFormat::Text => ui::write_catalog_table(out, catalog.all_rules())?,
        OutputFormat::Json => ui::write_json(out, catalog.all_rules())?,
        OutputFormat::Csv => ui::write_csv(out, catalog.all_rules())?,
    }
    Ok(())
}

fn handle_show(
    id: &str,
    output: OutputOverrides,
    config_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let overrides = ConfigOverrides {
        output,
        ..Default::default()
    };
    let config = resolve_config(config_path, &overrides)?;
    let catalog = load_catalog(&config.catalog)?;

    let rule = catalog
        .get(id)
        .ok_or_else(|| CliError::Argument(format!("No screening rule with id '{}'.", id)))?;

    match config.format {
        OutputFormat::Text => ui::write_rule_detail(out, rule)?,
        OutputFormat::Json => ui::write_json(out, rule)?,
        OutputFormat::Csv => ui::write_csv(out, [rule])?,
    }
    Ok(())
}

fn handle_check(path: PathBuf, out: &mut impl Write) -> Result<()> {
    info!("Validating catalog file {:?}", &path);
    let catalog = Catalog::load(&path)?;
    writeln!(
        out,
        "✓ {} is a valid catalog with {} rule(s).",
        path.display(),
        catalog.len()
    )?;
    Ok(())
}

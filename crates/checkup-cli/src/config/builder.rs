use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, CatalogSource, OutputFormat};
use crate::cli::OutputOverrides;
use crate::error::{CliError, Result};
use crate::utils::parser;
use checkup::core::models::sex::Sex;
use std::path::PathBuf;
use tracing::debug;

/// Command-line values that take precedence over every other configuration layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sex: Option<Sex>,
    pub show_notes: Option<bool>,
    pub output: OutputOverrides,
}

pub fn build_config(file_config: FileConfig, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = apply_set_values(file_config, &overrides.output.set_values)?;

    let query_file = file_config.query.take().unwrap_or_default();
    let sex = match (overrides.sex, query_file.sex.as_deref()) {
        (Some(sex), _) => sex,
        (None, Some(text)) => text
            .parse::<Sex>()
            .map_err(|e| CliError::Config(format!("Invalid value for `query.sex`: {}", e)))?,
        (None, None) => defaults.sex,
    };

    let output_file = file_config.output.take().unwrap_or_default();
    let format = match (overrides.output.format, output_file.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(text)) => parse_format(text)?,
        (None, None) => defaults.format,
    };
    let show_notes = overrides
        .show_notes
        .or(output_file.show_notes)
        .unwrap_or(defaults.show_notes);

    let catalog_file = file_config.catalog.take().unwrap_or_default();
    let catalog = match overrides.output.catalog.clone().or(catalog_file.path) {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Builtin,
    };

    let config = AppConfig {
        sex,
        catalog,
        format,
        show_notes,
    };
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

fn parse_format(text: &str) -> Result<OutputFormat> {
    match text.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(CliError::Config(format!(
            "Invalid output format '{}'. Expected 'text', 'json' or 'csv'.",
            text
        ))),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "query.sex" => {
                config.query.get_or_insert_with(Default::default).sex = Some(value_str.to_string());
            }
            "catalog.path" => {
                config.catalog.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format =
                    Some(value_str.to_string());
            }
            "output.show-notes" => {
                config.output.get_or_insert_with(Default::default).show_notes =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

use crate::config::models::OutputFormat;
use checkup::core::models::sex::Sex;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const DISCLAIMER: &str = "\
This tool does not provide a diagnosis. Symptoms, pregnancy, chronic illness, a relevant \
family history or other risk factors can change which screenings you need and when. \
Always consult a health professional.";

#[derive(Parser, Debug)]
#[command(
    author = "Checkup Contributors",
    version,
    about = "Checkup CLI - Suggests periodic health screenings for an age and sex, grouped by urgency.",
    after_help = DISCLAIMER,
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the screenings recommended for an age and sex, most urgent first.
    Recommend(RecommendArgs),
    /// Inspect the screening catalog or validate a custom catalog file.
    Catalog(CatalogArgs),
    /// Explain what each urgency tier means.
    Urgency,
}

/// Options shared by every command that reads the catalog and prints results.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOverrides {
    /// Use a custom catalog file instead of the builtin one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.format=json
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `recommend` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Age in years (0-120). Non-digit characters are ignored.
    #[arg(value_name = "AGE")]
    pub age: Option<String>,

    /// Biological sex: 'female' (f) or 'male' (m). Defaults to the configured value.
    #[arg(short, long, value_name = "SEX")]
    pub sex: Option<Sex>,

    /// Hide per-screening notes in text output.
    #[arg(long)]
    pub no_notes: bool,

    #[command(flatten)]
    pub output: OutputOverrides,
}

/// Arguments for the `catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// Available commands for catalog inspection.
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List every screening rule in catalog order.
    List {
        #[command(flatten)]
        output: OutputOverrides,
    },
    /// Show one screening rule in full.
    Show {
        /// The rule id (e.g. 'bp', 'cervical').
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        output: OutputOverrides,
    },
    /// Load a catalog file and check its rules for consistency.
    Check {
        /// The catalog file to validate.
        #[arg(required = true)]
        path: PathBuf,
    },
}

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        if e.is_broken_pipe() {
            return;
        }
        match &e {
            CliError::InvalidAge(age_error) => eprintln!("{}", ui::age_message(age_error)),
            _ => eprintln!("\n❌ Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("Checkup CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let config_path = cli.config.as_deref();

    let command_result = match cli.command {
        Commands::Recommend(args) => {
            info!("Dispatching to 'recommend' command.");
            commands::recommend::run(args, config_path, &mut out)
        }
        Commands::Catalog(args) => {
            info!("Dispatching to 'catalog' command.");
            commands::catalog::run(args, config_path, &mut out)
        }
        Commands::Urgency => {
            info!("Dispatching to 'urgency' command.");
            commands::urgency::run(&mut out)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(CliError::InvalidAge(e)) => info!("Command stopped on invalid input: {}", e),
        Err(e) if e.is_broken_pipe() => debug!("Output closed by the reader."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}

use checkup::core::catalog::CatalogError;
use checkup::engine::error::AgeError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    InvalidAge(#[from] AgeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Input the user can correct exits with 2; everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidAge(_) | CliError::Argument(_) => 2,
            _ => 1,
        }
    }

    /// True when stdout was closed by the reader, e.g. output piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        let io_error = match self {
            CliError::Io(e) => Some(e),
            CliError::Output(e) => match e.kind() {
                csv::ErrorKind::Io(e) => Some(e),
                _ => None,
            },
            _ => None,
        };
        io_error.is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

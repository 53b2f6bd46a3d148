use std::path::PathBuf;
use thiserror::Error;
use xdlvo::core::params::ParamLoadError;
use xdlvo::engine::error::EngineError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ParamLoadError> for CliError {
    fn from(e: ParamLoadError) -> Self {
        match e {
            ParamLoadError::Io { path, source } => CliError::FileParsing {
                path: PathBuf::from(path),
                source: source.into(),
            },
            ParamLoadError::Toml { path, source } => CliError::FileParsing {
                path: PathBuf::from(path),
                source: source.into(),
            },
            invalid @ ParamLoadError::Invalid { .. } => CliError::Config(invalid.to_string()),
        }
    }
}

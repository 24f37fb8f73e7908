//! Application errors.

use tagging_core::{DatasetError, EngineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),
    #[error("Missing argument for `{0}`")]
    MissingArgument(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("Could not load tags: {0}")]
    Dataset(#[from] DatasetError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

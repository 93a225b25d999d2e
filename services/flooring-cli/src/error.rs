use flooring_types::errors::FlooringError;
use std::io;
use thiserror::Error;

/// Failure of one menu action
#[derive(Debug, Error)]
pub enum CliError {
    /// Reported to the operator; the menu keeps running.
    #[error(transparent)]
    Flooring(#[from] FlooringError),

    /// Console input or output failed; ends the session.
    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

use blog_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Rejected session line, or the help text clap renders for `help`.
    #[error(transparent)]
    Command(#[from] clap::Error),
}

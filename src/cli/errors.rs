use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be a positive integer")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Input file not found: {path}")]
    MissingInput { path: String },

    #[error("Could not load config {path}: {source}")]
    Config {
        path: String,
        source: favicrop::Error,
    },

    #[error(transparent)]
    Favicon(#[from] favicrop::Error),
}

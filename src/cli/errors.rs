use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    // Fixed help string; operand-count failures print this and nothing else
    #[error("Usage: add <int:a> <int:b>")]
    Usage,

    #[error("{0}")]
    Arith(#[from] arith::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

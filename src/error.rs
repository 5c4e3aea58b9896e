//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Both variants are terminal, user-facing conditions; neither is retryable.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected exactly two integer arguments, got {got}")]
    InvalidArgumentCount { got: usize },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: i32 },
}

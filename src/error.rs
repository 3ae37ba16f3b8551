use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be non-negative")]
    Negative { field: &'static str },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure of a single factorial computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorialError {
    #[error("n must be non-negative")]
    InvalidArgument,
    #[error("recursion depth limit of {limit} exceeded for n={n}")]
    StackExhausted { n: i64, limit: usize },
}

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Required input columns are missing from the campaign table.
///
/// Surfaced before any aggregation work is attempted, naming every
/// missing column.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

/// Structurally valid but semantically invalid allocator input.
#[derive(Error, Debug, Clone)]
pub enum InputError {
    #[error("no platforms to allocate across")]
    NoPlatforms,

    #[error("total budget must be positive, got {budget}")]
    NonPositiveBudget { budget: rust_decimal::Decimal },
}

/// The linear-program solve did not succeed.
///
/// Carries the solver's diagnostic verbatim; terminal for the invocation,
/// callers must re-invoke with corrected input.
#[derive(Error, Debug, Clone)]
pub enum OptimizationError {
    #[error("budget optimization failed: {detail}")]
    SolveFailed { detail: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Optimization(#[from] OptimizationError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),
    #[error("Unknown applicant: {0}")]
    UnknownApplicant(String),
    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

pub type Result<T> = std::result::Result<T, LoanError>;

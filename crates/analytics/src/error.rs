use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Calculation error: '{0}' is outside the representable range")]
    OutOfRange(String),
}

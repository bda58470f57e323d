use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize the export payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("The report has no value for '{0}'")]
    MissingValue(String),
}

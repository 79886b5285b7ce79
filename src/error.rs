use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Failed to read items from {path}: {source}")]
    ItemSourceError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Error types for artifact loading and querying
use thiserror::Error;

/// Main error type for dashboard data operations.
///
/// Every variant is fatal to the render that triggered it: no retries,
/// no fallback content. `IncompatibleArtifact` aborts only the forecast
/// branch; other branches render independently.
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced artifact file does not exist or is unreadable
    #[error("Missing artifact: {0}")]
    MissingArtifact(String),

    /// A tabular artifact's schema does not match what the loader expects
    #[error("Malformed row in {artifact}: {detail}")]
    MalformedRow { artifact: String, detail: String },

    /// A loaded forecast artifact does not expose the expected plotting capability
    #[error("Incompatible forecast artifact: {0}")]
    IncompatibleArtifact(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Underlying SQLite operation failed
    #[error("Database operation failed: {0}")]
    Db(#[from] rusqlite::Error),
}

impl Error {
    /// Shorthand for a `MalformedRow` with an owned artifact name and detail.
    pub fn malformed(artifact: &str, detail: impl Into<String>) -> Self {
        Error::MalformedRow {
            artifact: artifact.to_string(),
            detail: detail.into(),
        }
    }
}

/// Type alias for Results using the dashboard data error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_artifact() {
        let err = Error::malformed("final_daily_melt_eto.csv", "missing column 'value'");
        let msg = err.to_string();
        assert!(
            msg.contains("final_daily_melt_eto.csv"),
            "Message should name the artifact: {}",
            msg
        );
        assert!(msg.contains("missing column"), "Message should carry detail");
    }

    #[test]
    fn missing_artifact_message() {
        let err = Error::MissingArtifact("map_malolos.html".to_string());
        assert_eq!(err.to_string(), "Missing artifact: map_malolos.html");
    }
}

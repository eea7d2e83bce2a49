use std::path::PathBuf;
use thiserror::Error;

/// Faults raised while fetching or parsing a CSV resource
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("load task failed: {0}")]
    Task(String),
}

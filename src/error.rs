use thiserror::Error;

/// Errors that can occur while analyzing a recipe
///
/// Parsing itself never fails: malformed lines, missing sections and unknown
/// analysis modes all degrade to a best-effort result. The variants below
/// cover the collaborator and adapter failures that remain.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The knowledge collaborator failed while answering a lookup
    #[error("Knowledge lookup unavailable: {0}")]
    KnowledgeUnavailable(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read recipe input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize an analysis result
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// Config validation error (empty label, duplicate list, etc.).
    #[error("config validation error: {0}")]
    ConfigValidation(String),
    /// IO error reading an input list or writing the output file.
    #[error("{}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    /// Collation locale cannot be parsed or loaded.
    #[error("collation locale '{id}' unavailable: {message}")]
    Locale { id: String, message: String },
    /// JSON serialization of a result failed.
    #[error("JSON serialization error: {0}")]
    Serialize(String),
}

impl ReconError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io { path: path.into(), message: err.to_string() }
    }
}

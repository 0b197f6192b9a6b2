use thiserror::Error;

/// Errors raised by the CLI host and configuration layer.
///
/// Progress tracking itself never fails: an unknown stage id degrades to the
/// fallback label and a zero percent, it is not an error.
#[derive(Error, Debug)]
pub enum StagelineError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Driver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StagelineError>;

use thiserror::Error;

/// Operational errors. Manifest violations are diagnostics, not errors.
#[derive(Error, Debug)]
pub enum YamlvalidError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to walk {path}: {message}")]
    Walk { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    ParsingFailed { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, YamlvalidError>;

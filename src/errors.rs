use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("None of platforms is chosen!")]
    NoPlatformSelected,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemoError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}

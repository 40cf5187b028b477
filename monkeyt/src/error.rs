//! Error handling module for the monkeyt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the monkeyt CLI application.
#[derive(Error, Debug)]
pub enum MonkeytError {
    /// Error when loading or applying configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a configuration file fails to parse.
    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error surfaced by the interpreter pipeline. For parse failures the
    /// display form is the diagnostic list itself, newline-separated.
    #[error("{0}")]
    Pipeline(#[from] monkeyc_drv::DriverError),
}

/// Result type alias using MonkeytError.
pub type Result<T> = std::result::Result<T, MonkeytError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MonkeytError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MonkeytError = io_err.into();
        assert!(matches!(err, MonkeytError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [valid").unwrap_err();
        let err: MonkeytError = toml_err.into();
        assert!(matches!(err, MonkeytError::Toml(_)));
    }

    #[test]
    fn test_pipeline_error_displays_diagnostics() {
        let driver_err = monkeyc_drv::DriverError::Parse {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        let err: MonkeytError = driver_err.into();
        assert_eq!(err.to_string(), "first\nsecond");
    }
}

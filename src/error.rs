//! Error types and handling for the `HeatGuard` service

use thiserror::Error;

/// Main error type for the `HeatGuard` service
#[derive(Error, Debug)]
pub enum HeatGuardError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Risk model artifact errors
    #[error("Model error: {message}")]
    Model { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl HeatGuardError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new model error
    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HeatGuardError::Config { .. } => {
                "Configuration error. Please check your environment and API keys.".to_string()
            }
            HeatGuardError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            HeatGuardError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            HeatGuardError::Model { .. } => {
                "Risk model unavailable. Run the trainer to produce a model artifact.".to_string()
            }
            HeatGuardError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            HeatGuardError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = HeatGuardError::config("missing API key");
        assert!(matches!(config_err, HeatGuardError::Config { .. }));

        let api_err = HeatGuardError::api("connection failed");
        assert!(matches!(api_err, HeatGuardError::Api { .. }));

        let validation_err = HeatGuardError::validation("invalid coordinates");
        assert!(matches!(validation_err, HeatGuardError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = HeatGuardError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let model_err = HeatGuardError::model("test");
        assert!(model_err.user_message().contains("Risk model unavailable"));

        let validation_err = HeatGuardError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guard_err: HeatGuardError = io_err.into();
        assert!(matches!(guard_err, HeatGuardError::Io { .. }));
    }
}

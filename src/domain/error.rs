use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Library-wide error type for modx-install operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A credential or field value was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The MODX distribution could not be prepared in the working directory.
    #[error("Failed to prepare MODX: {0}")]
    Download(String),

    /// The setup configuration document could not be written.
    #[error("Could not write setup config to {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The setup configuration template failed to render.
    #[error("Failed to render setup config: {0}")]
    Template(String),

    /// Interactive input failed or was cancelled.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// A helper program could not be launched.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn download<S: Into<String>>(message: S) -> Self {
        AppError::Download(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_write_reports_path_and_cause() {
        let err = AppError::ConfigWrite {
            path: PathBuf::from("/srv/site/config.xml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "Could not write setup config to /srv/site/config.xml: permission denied"
        );
    }

    #[test]
    fn validation_errors_keep_their_message() {
        let err = AppError::from(ValidationError::PasswordTooShort { min: 8 });
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("at least 8 characters"));
    }
}

//! Application error type shared by services and the command-line front-end.
//!
//! Every variant is recoverable: the worst outcome for a caller is a blocked
//! submission or a "not found" screen.

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::schema::ValidationReport;

/// JSON body printed for failed commands, `{"error": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted form failed schema validation.
    #[error("{0}")]
    InvalidForm(ValidationReport),

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidForm(_) => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    /// Returns the validation report when this error came from the schema.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            AppError::InvalidForm(report) => Some(report),
            _ => None,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::InvalidForm(report) => (
                "Form validation failed".to_string(),
                json!({ "fields": report.by_path() }),
            ),
            AppError::NotFound { message, details } | AppError::Conflict { message, details } => {
                (message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_error_info(),
        }
    }
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        AppError::InvalidForm(report)
    }
}

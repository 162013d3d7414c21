use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("Invalid operator: {operator}")]
    UnknownOperator { operator: String },

    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: String, unit: String },

    #[error("Invalid operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid JSON: {message}")]
    InvalidJsonInput { message: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// 給終端使用者看的錯誤訊息 (啟動路徑使用)
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::MissingConfigError { field } => {
                format!("Configuration is missing the required field '{}'", field)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!(
                "Configuration field '{}' has invalid value '{}': {}",
                field, value, reason
            ),
            Self::IoError(e) => format!("File system problem: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags, then restart"
            }
            Self::IoError(_) => {
                "Check that the path exists and the process has permission to write to it"
            }
            Self::InvalidJsonInput { .. } => "Make sure the input is valid JSON",
            _ => "Check the request parameters and try again",
        }
    }
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            // 詳細錯誤只進日誌，不回傳給客戶端
            tracing::error!("request failed: {}", self);
            (status, Json(json!({ "error": "Internal server error" }))).into_response()
        } else {
            (status, Json(json!({ "error": self.to_string() }))).into_response()
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        assert_eq!(
            ToolError::DivisionByZero.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ToolError::MissingField {
                field: "operand1".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ToolError::InvalidJsonInput {
                message: "eof".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_errors_are_server_errors() {
        let io = ToolError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let config = ToolError::ConfigError {
            message: "bad".into(),
        };
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(ToolError::DivisionByZero.to_string(), "division by zero");
    }
}

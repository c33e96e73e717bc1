use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StaffError {
    #[error("Department not found: {0}")]
    DepartmentNotFound(String),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Input closed")]
    InputClosed,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl StaffError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        StaffError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Lookup misses and zero-row mutations; nothing was changed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StaffError::DepartmentNotFound(_)
                | StaffError::RoleNotFound(_)
                | StaffError::NotFound { .. }
        )
    }
}

impl IntoResponse for StaffError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            StaffError::DepartmentNotFound(_)
            | StaffError::RoleNotFound(_)
            | StaffError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                },
            ),
            StaffError::InvalidInput { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_INPUT".to_string(),
                    message: self.to_string(),
                },
            ),
            StaffError::Database(_)
            | StaffError::Io(_)
            | StaffError::Config(_)
            | StaffError::InputClosed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid recipe id: {0}")]
    InvalidId(String),

    #[error("Recipe {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, error_message) = match &self {
            ApiError::InvalidId(_) => ("validation_error", self.to_string()),
            ApiError::NotFound(_) => ("not_found", self.to_string()),
            ApiError::Database(_) => {
                tracing::error!("Database error: {}", self);
                ("storage_error", "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
            }
        }));

        (status, body).into_response()
    }
}

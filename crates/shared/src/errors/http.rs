use crate::errors::{error::ErrorResponse, repository::RepositoryError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Validation { message: String, details: Value },
    NotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) | HttpError::Validation { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::Internal(msg)
            | HttpError::Validation { message: msg, .. } => write!(f, "{msg}"),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => HttpError::NotFound(err.to_string()),
            other => HttpError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            HttpError::Validation { message, details } => {
                ErrorResponse::with_details(message, details)
            }
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::Internal(msg) => {
                ErrorResponse::new(msg)
            }
        };

        if status.is_server_error() {
            tracing::error!("❌ {}: {}", status, body.error);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from(RepositoryError::NotFound(7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "no stock record found with stockid=7");
    }

    #[test]
    fn query_failure_maps_to_500_with_context() {
        let err = HttpError::from(RepositoryError::query(
            "delete stock with stockid=3",
            sqlx::Error::PoolTimedOut,
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("failed to delete stock with stockid=3"));
    }

    #[test]
    fn validation_body_carries_details() {
        let details = serde_json::json!({ "company": ["company is required"] });
        let err = HttpError::Validation {
            message: "invalid payload: company: company is required".into(),
            details: details.clone(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let body = match err {
            HttpError::Validation { message, details } => {
                ErrorResponse::with_details(message, details)
            }
            _ => unreachable!(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["details"], details);
    }

    #[test]
    fn plain_error_body_omits_details() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));
    }
}

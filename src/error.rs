use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Any failure talking to the report store: connection loss, pool
    /// exhaustion, or a statement the store rejects.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// A query string the filter extractor could not read, such as a
    /// repeated key. Reported the same way as a store failure.
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
            }
            AppError::Query(e) => {
                tracing::warn!(error = %e, "Unreadable report filter");
            }
        }

        let body = json!({
            "error": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

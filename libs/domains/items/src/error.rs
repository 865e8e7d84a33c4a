use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Message prefix for a missing item, followed by the id.
pub const ITEM_NOT_FOUND_ID: &str = "Item not found with id: ";

#[derive(Debug, Error)]
pub enum ItemError {
    /// No item with the requested id. Carries the full client-facing message.
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ItemError {
    pub fn not_found(id: i64) -> Self {
        ItemError::NotFound(format!("{ITEM_NOT_FOUND_ID}{id}"))
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

/// 404 with the message as a plain-text body.
///
/// Shared by the `IntoResponse` impl and the delete handler so both produce
/// the same response.
pub fn not_found_response(message: String) -> Response {
    (StatusCode::NOT_FOUND, message).into_response()
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            ItemError::NotFound(message) => not_found_response(message),
            ItemError::Database(e) => AppError::Database(e).into_response(),
            ItemError::Storage(msg) => AppError::InternalServerError(msg).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use http_body_util::BodyExt;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ItemError::not_found(999).to_string(),
            "Item not found with id: 999"
        );
    }

    #[tokio::test]
    async fn test_not_found_is_plain_text_404() {
        let response = ItemError::not_found(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Item not found with id: 7");
    }

    #[tokio::test]
    async fn test_storage_errors_use_json_envelope() {
        let response = ItemError::Storage("disk full".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "INTERNAL_ERROR");

        let err = DbErr::Conn(RuntimeErr::Internal("refused".to_string()));
        let response = ItemError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let err = DbErr::Query(RuntimeErr::Internal("syntax".to_string()));
        let response = ItemError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "DATABASE_ERROR");
    }
}

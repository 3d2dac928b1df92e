// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- Validation Error
/// 검색 파라미터 검증 오류
///
/// 요청당 하나의 메시지만 담는다. 메시지 문구는 클라이언트가 그대로 매칭하므로 바꾸지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
// endregion: --- Validation Error

// region:    --- Store Error
/// 저장소 오류
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to read seed data {path:?}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed data: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("invalid seed record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
// endregion: --- Store Error

// region:    --- App Error
/// HTTP 응답으로 변환되는 오류
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.message),
            AppError::Store(e) => {
                // 저장소 오류 상세는 로그에만 남긴다
                error!("{:<12} --> 저장소 오류: {:?}", "Handler", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
// endregion: --- App Error

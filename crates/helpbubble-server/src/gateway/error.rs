use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use helpbubble::reader::ReaderError;

use super::status::HELPBUBBLE_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("QA model not loaded")]
    ModelUnavailable,

    #[error("inference failed: {0}")]
    InferenceFailed(#[from] ReaderError),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, status_value) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::ModelUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "model_unavailable")
            }
            GatewayError::InferenceFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "inference_error")
            }
            GatewayError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            HELPBUBBLE_STATUS_HEADER,
            HeaderValue::from_static(status_value),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}

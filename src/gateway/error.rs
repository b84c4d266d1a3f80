use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::constants::{STATUS_ERROR, STATUS_HEADER};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown character: {0}")]
    UnknownCharacter(i64),

    #[error("catalog error: {0}")]
    CatalogFailed(#[from] CatalogError),

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
        let (status, error_message, nestrank_status) = match &self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string(), "invalid_request")
            }
            GatewayError::UnknownCharacter(_) => {
                (StatusCode::NOT_FOUND, self.to_string(), "not_found")
            }
            GatewayError::CatalogFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
                "catalog_error",
            ),
            GatewayError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
                "internal_error",
            ),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            STATUS_HEADER,
            HeaderValue::from_str(nestrank_status)
                .unwrap_or(HeaderValue::from_static(STATUS_ERROR)),
        );

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}

//! HTTP mapping for `MirrorError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use mirror_core::error::{ClientCode, MirrorError};

/// `MirrorError` rendered as a JSON error body.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub MirrorError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.0.to_string(),
            "code": self.0.client_code().as_str(),
        }));

        (status, body).into_response()
    }
}

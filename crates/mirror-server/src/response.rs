//! Response envelope writer.
//!
//! Every successful reply is a single JSON body with a fixed content type and
//! the mirror's API key header. The key is a static string; requests are never
//! checked against it.

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use mirror_core::error::{MirrorError, Result};

/// Header carrying the mirror API key (`X-Mirror-api-key`).
pub const API_KEY_HEADER: &str = "x-mirror-api-key";
pub const API_KEY: &str = "api_key";

pub fn json_response<T: Serialize>(payload: &T) -> Result<Response> {
    let body = serde_json::to_string(payload)
        .map_err(|e| MirrorError::Internal(format!("encode response failed: {e}")))?;

    tracing::info!(response = %body, "response");

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
        (HeaderName::from_static(API_KEY_HEADER), HeaderValue::from_static(API_KEY)),
    ];

    Ok((StatusCode::OK, headers, body).into_response())
}

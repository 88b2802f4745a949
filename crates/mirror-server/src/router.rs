//! Route table and request dispatch.
//!
//! Routing is an ordered table of `(method, path, endpoint)` entries; the
//! first exact match wins. Anything that matches no entry, including a known
//! path with another method, is answered with `501 Not Implemented` and an
//! empty body. Axum's own path router would answer 405/404 there, so the whole
//! table sits behind a single fallback handler.
//!
//! The body is only read once the metric route has been picked, so payload
//! size never changes the answer for the other routes.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};

use mirror_core::error::{MirrorError, Result};
use mirror_core::generate;
use mirror_core::protocol::metric::parse_metric_request;

use crate::{app_state::AppState, error::ApiError, response::json_response};

/// Largest metric query body accepted.
pub const MAX_METRIC_BODY_BYTES: usize = 64 * 1024;

/// Response generators reachable through the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TestConnection,
    FieldNames,
    FieldValues,
    Metric,
}

#[derive(Debug)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

pub static ROUTES: [Route; 4] = [
    Route {
        method: Method::POST,
        path: "/api/connection",
        endpoint: Endpoint::TestConnection,
    },
    Route {
        method: Method::POST,
        path: "/api/field/name",
        endpoint: Endpoint::FieldNames,
    },
    Route {
        method: Method::POST,
        path: "/api/field/value",
        endpoint: Endpoint::FieldValues,
    },
    Route {
        method: Method::POST,
        path: "/api/metric",
        endpoint: Endpoint::Metric,
    },
];

/// First table entry matching `method` and the URI path (query string excluded).
pub fn resolve(method: &Method, path: &str) -> Option<Endpoint> {
    ROUTES
        .iter()
        .find(|r| r.method == *method && r.path == path)
        .map(|r| r.endpoint)
}

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}

async fn dispatch(State(app): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let Some(endpoint) = resolve(&method, &path) else {
        tracing::debug!(%method, %path, "no route");
        return StatusCode::NOT_IMPLEMENTED.into_response();
    };

    tracing::info!(%method, %path, ?endpoint, "dispatch");

    match handle(&app, endpoint, req.into_body()).await {
        Ok(res) => res,
        Err(e) => {
            tracing::warn!(%method, %path, error = %e, "request rejected");
            ApiError::from(e).into_response()
        }
    }
}

async fn handle(app: &AppState, endpoint: Endpoint, body: Body) -> Result<Response> {
    match endpoint {
        Endpoint::TestConnection => json_response(&generate::test_connection()),
        Endpoint::FieldNames => json_response(&generate::field_names()),
        Endpoint::FieldValues => json_response(&generate::field_values()),
        Endpoint::Metric => {
            let body = to_bytes(body, MAX_METRIC_BODY_BYTES)
                .await
                .map_err(|e| MirrorError::BadRequest(format!("read metric body failed: {e}")))?;
            let req = parse_metric_request(&body)?;
            json_response(&generate::metrics(&req.query, app.sampler()))
        }
    }
}

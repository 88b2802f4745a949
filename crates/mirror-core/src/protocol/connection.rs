use serde::{Deserialize, Serialize};

/// Status reported by a healthy mirror.
pub const STATUS_OK: &str = "OK";

/// Reply to `POST /api/connection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub struct TestConnectionResponse {
    pub status: String,
}

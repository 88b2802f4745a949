//! Metric query and telemetry payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MirrorError, Result};

/// Column layout of raw points: `[value, timestamp]`.
pub const RAW_DATA_FORMAT: [&str; 2] = ["value", "timestamp"];
/// Column layout of aggregated points: `[value, startTimestamp, endTimestamp]`.
pub const AGGREGATED_DATA_FORMAT: [&str; 3] = ["value", "startTimestamp", "endTimestamp"];

/// Body of `POST /api/metric`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricRequest {
    pub query: MetricQuery,
}

/// Requested window. The time unit is opaque; only arithmetic is done on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricQuery {
    pub start_time: i64,
    pub end_time: i64,
    /// Only presence matters. JSON `null` deserializes to `None`.
    #[serde(default)]
    pub aggregation: Option<Value>,
}

impl MetricQuery {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            aggregation: None,
        }
    }

    pub fn with_aggregation(mut self, aggregation: Value) -> Self {
        self.aggregation = match aggregation {
            Value::Null => None,
            v => Some(v),
        };
        self
    }

    pub fn is_aggregated(&self) -> bool {
        self.aggregation.is_some()
    }
}

/// Parse a raw request body into a typed metric request.
///
/// An empty body is reported like any other malformed input.
pub fn parse_metric_request(body: &[u8]) -> Result<MetricRequest> {
    serde_json::from_slice(body)
        .map_err(|e| MirrorError::BadRequest(format!("invalid metric query: {e}")))
}

/// `[value, timestamp]`.
pub type RawPoint = (f64, i64);
/// `[value, startTimestamp, endTimestamp]`.
pub type AggregatedPoint = (f64, i64, i64);

/// Telemetry block; the variant name is emitted as `_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Telemetry {
    #[serde(rename_all = "camelCase")]
    RawMetricTelemetry {
        points: Vec<RawPoint>,
        data_format: Vec<String>,
        is_partial: bool,
    },
    #[serde(rename_all = "camelCase")]
    AggregatedMetricTelemetry {
        points: Vec<AggregatedPoint>,
        data_format: Vec<String>,
        is_partial: bool,
    },
}

impl Telemetry {
    pub fn raw(points: Vec<RawPoint>) -> Self {
        Telemetry::RawMetricTelemetry {
            points,
            data_format: RAW_DATA_FORMAT.iter().map(|s| s.to_string()).collect(),
            is_partial: false,
        }
    }

    pub fn aggregated(points: Vec<AggregatedPoint>) -> Self {
        Telemetry::AggregatedMetricTelemetry {
            points,
            data_format: AGGREGATED_DATA_FORMAT.iter().map(|s| s.to_string()).collect(),
            is_partial: false,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Telemetry::RawMetricTelemetry { points, .. } => points.len(),
            Telemetry::AggregatedMetricTelemetry { points, .. } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reply to `POST /api/metric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub struct MetricsResponse {
    pub telemetry: Telemetry,
}

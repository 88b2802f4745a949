//! Response generators.
//!
//! The three listing generators are static. [`metrics`] is the only one that
//! depends on its input: it spreads roughly 50 samples across the requested
//! window and shapes them as raw or aggregated points.

use crate::protocol::connection::{TestConnectionResponse, STATUS_OK};
use crate::protocol::fields::{
    FieldDescriptor, FieldNamesResponse, FieldType, FieldValue, FieldValuesResponse,
};
use crate::protocol::metric::{MetricQuery, MetricsResponse, Telemetry};
use crate::sampler::Sampler;

/// Number of samples a window is divided into.
pub const TARGET_SAMPLES: i128 = 50;

/// Step used when the window is narrower than [`TARGET_SAMPLES`] units,
/// empty, or inverted.
pub const FALLBACK_STEP: i64 = 1000;

pub fn test_connection() -> TestConnectionResponse {
    TestConnectionResponse {
        status: STATUS_OK.to_string(),
    }
}

pub fn field_names() -> FieldNamesResponse {
    FieldNamesResponse {
        fields: vec![
            FieldDescriptor::new("field1", FieldType::String),
            FieldDescriptor::new("field2", FieldType::Boolean),
            FieldDescriptor::new("field3", FieldType::Number),
        ],
        is_partial: false,
    }
}

pub fn field_values() -> FieldValuesResponse {
    FieldValuesResponse {
        values: vec![
            FieldValue::CompleteValue {
                value: "value1".to_string(),
            },
            FieldValue::FieldValuePattern {
                value: "cpu.*".to_string(),
            },
        ],
        is_partial: false,
    }
}

/// Distance between consecutive timestamps for a window.
///
/// Truncates toward zero; any non-positive result falls back to
/// [`FALLBACK_STEP`].
pub fn step_for(start_time: i64, end_time: i64) -> i64 {
    let span = i128::from(end_time) - i128::from(start_time);
    match i64::try_from(span / TARGET_SAMPLES) {
        Ok(step) if step > 0 => step,
        _ => FALLBACK_STEP,
    }
}

/// Timestamps `start, start+step, ..` strictly below `end`.
pub fn timestamps(start_time: i64, end_time: i64, step: i64) -> impl Iterator<Item = i64> {
    std::iter::successors(Some(start_time), move |t| t.checked_add(step))
        .take_while(move |t| *t < end_time)
}

/// Sample the query window.
pub fn metrics(query: &MetricQuery, sampler: &dyn Sampler) -> MetricsResponse {
    let step = step_for(query.start_time, query.end_time);
    let ticks = timestamps(query.start_time, query.end_time, step);

    let telemetry = if query.is_aggregated() {
        Telemetry::aggregated(
            ticks
                .map(|t| (sampler.next_value(), t, t.saturating_add(step)))
                .collect(),
        )
    } else {
        Telemetry::raw(ticks.map(|t| (sampler.next_value(), t)).collect())
    };

    tracing::debug!(
        start = query.start_time,
        end = query.end_time,
        step,
        points = telemetry.len(),
        aggregated = query.is_aggregated(),
        "sampled metric window"
    );

    MetricsResponse { telemetry }
}

//! Mirror API payloads (JSON).
//!
//! Every protocol object carries a `_type` discriminator that the consuming
//! client uses to pick a parser for the rest of the object:
//! - `connection`: connection test response.
//! - `fields`: field-name and field-value listings.
//! - `metric`: the metric query and the telemetry it produces.

pub mod connection;
pub mod fields;
pub mod metric;

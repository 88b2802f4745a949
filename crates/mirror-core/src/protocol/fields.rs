//! Field listings.
//!
//! Both listings are complete in a single reply, so `isPartial` is always
//! false; the mirror never paginates.

use serde::{Deserialize, Serialize};

/// Value type of a field as reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    String,
    Boolean,
    Number,
}

/// One entry of the field-name listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub field_name: String,
    pub field_type: FieldType,
    /// Whether the field holds classified data. The mirror never marks one.
    pub classified: bool,
}

impl FieldDescriptor {
    pub fn new(field_name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_name: field_name.into(),
            field_type,
            classified: false,
        }
    }
}

/// Reply to `POST /api/field/name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub struct FieldNamesResponse {
    pub fields: Vec<FieldDescriptor>,
    pub is_partial: bool,
}

/// One entry of the field-value listing: a literal value or a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum FieldValue {
    CompleteValue { value: String },
    FieldValuePattern { value: String },
}

/// Reply to `POST /api/field/value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub struct FieldValuesResponse {
    pub values: Vec<FieldValue>,
    pub is_partial: bool,
}

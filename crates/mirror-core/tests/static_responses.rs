//! Connection and field listing payloads.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use mirror_core::generate;
use mirror_core::protocol::fields::{FieldNamesResponse, FieldType, FieldValue};

#[test]
fn connection_reports_ok() {
    let v = serde_json::to_value(generate::test_connection()).unwrap();
    assert_eq!(v, json!({ "_type": "TestConnectionResponse", "status": "OK" }));
}

#[test]
fn field_names_shape() {
    let v = serde_json::to_value(generate::field_names()).unwrap();
    assert_eq!(
        v,
        json!({
            "_type": "FieldNamesResponse",
            "isPartial": false,
            "fields": [
                { "_type": "FieldDescriptor", "fieldName": "field1", "fieldType": "STRING", "classified": false },
                { "_type": "FieldDescriptor", "fieldName": "field2", "fieldType": "BOOLEAN", "classified": false },
                { "_type": "FieldDescriptor", "fieldName": "field3", "fieldType": "NUMBER", "classified": false }
            ]
        })
    );
}

#[test]
fn field_values_shape() {
    let v = serde_json::to_value(generate::field_values()).unwrap();
    assert_eq!(
        v,
        json!({
            "_type": "FieldValuesResponse",
            "isPartial": false,
            "values": [
                { "_type": "CompleteValue", "value": "value1" },
                { "_type": "FieldValuePattern", "value": "cpu.*" }
            ]
        })
    );
}

#[test]
fn listings_are_byte_identical_across_calls() {
    let a = serde_json::to_string(&generate::field_names()).unwrap();
    let b = serde_json::to_string(&generate::field_names()).unwrap();
    assert_eq!(a, b);

    let a = serde_json::to_string(&generate::field_values()).unwrap();
    let b = serde_json::to_string(&generate::field_values()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn client_can_read_listings_back() {
    let s = serde_json::to_string(&generate::field_names()).unwrap();
    let back: FieldNamesResponse = serde_json::from_str(&s).unwrap();
    let types: Vec<FieldType> = back.fields.iter().map(|f| f.field_type).collect();
    assert_eq!(types, [FieldType::String, FieldType::Boolean, FieldType::Number]);
    assert!(back.fields.iter().all(|f| !f.classified));

    let values = generate::field_values().values;
    assert!(matches!(&values[1], FieldValue::FieldValuePattern { value } if value == "cpu.*"));
}

//! Wire shape of a posted result.
//!
//! The aggregation API keys per-test metadata under `other_attributes` and
//! outcome data under `result_attributes`; this module renders the flat
//! `ResultRecord` into that shape.

use serde_json::{json, Value};
use traggr_core::ResultRecord;

pub(crate) fn wire_record(record: &ResultRecord) -> Value {
    let mut other = json!({
        "title": record.title,
        "description": record.description,
    });
    if let Some(attributes) = &record.attributes {
        other["attributes"] = json!(attributes);
    }

    let mut result = json!({ "result": record.result });
    if let Some(error) = &record.error {
        result["error"] = json!(error);
    }
    if let Some(comment) = &record.comment {
        result["comment"] = json!(comment);
    }

    json!({
        "component": record.component,
        "suite": record.suite,
        "test_id": record.test_id,
        "other_attributes": other,
        "result_attributes": result,
    })
}

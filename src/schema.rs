use serde_json::Value;

use crate::report::{REQUIRED_FIELDS, TEXT_FIELDS};

/// JSON Schema (draft 2020-12) describing the same shape `ReportValidator` enforces.
///
/// One difference: JSON Schema's `integer` accepts `5.0`, which the validator rejects.
pub const REPORT_SCHEMA: &str = include_str!("../schemas/todo_report.schema.json");

pub fn report_schema() -> serde_json::Result<Value> {
    serde_json::from_str(REPORT_SCHEMA)
}

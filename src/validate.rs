// report/src/validate.rs

use serde::Deserialize;
use serde_json::{Map, Value};
use std::{collections::BTreeSet, fs, path::Path};
use tracing::debug;

use crate::{
    error::{Expected, ValidationError},
    report::{Confidence, Report, ReportItem, CONFIDENCE_FIELD, LINE_NUMBER_FIELD, REQUIRED_FIELDS, TEXT_FIELDS},
};

pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `[]` is vacuously valid.
    Empty,
    Passed { report: Report },
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Report is empty (valid).",
            Self::Passed { .. } => "Validation passed.",
        }
    }

    pub fn items(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Passed { report } => report.len(),
        }
    }
}

/// Checks a TODO report against the fixed item schema.
///
/// Every check short-circuits: the first violation (lowest item index, then
/// key presence, confidence, text fields in `TEXT_FIELDS` order, line number)
/// is the only one reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportValidator;

impl ReportValidator {
    pub fn new() -> Self { Self }

    pub fn validate_path(&self, path: &Path) -> Result<Outcome> {
        debug!(path = %path.display(), "reading report");
        let text = fs::read_to_string(path).map_err(ValidationError::Read)?;
        self.validate_str(&text)
    }

    pub fn validate_str(&self, text: &str) -> Result<Outcome> {
        let value: Value = serde_json::from_str(text).map_err(ValidationError::Parse)?;
        self.validate_value(&value)
    }

    pub fn validate_value(&self, value: &Value) -> Result<Outcome> {
        let Value::Array(items) = value else { return Err(ValidationError::RootShape); };
        if items.is_empty() { return Ok(Outcome::Empty); }
        let items = items.iter()
            .enumerate()
            .map(|(index, item)| check_item(index, item))
            .collect::<Result<Vec<_>>>()?;
        debug!(items = items.len(), "all items passed");
        Ok(Outcome::Passed { report: Report { items } })
    }
}

fn check_item(index: usize, item: &Value) -> Result<ReportItem> {
    let Value::Object(obj) = item else { return Err(ValidationError::ItemShape { index }); };

    let missing = missing_fields(obj);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { index, missing });
    }

    let confidence = obj.get(CONFIDENCE_FIELD).and_then(as_integer);
    if confidence.and_then(Confidence::new).is_none() {
        return Err(ValidationError::InvalidConfidence { index });
    }

    for &field in TEXT_FIELDS {
        if !matches!(obj.get(field), Some(Value::String(_))) {
            return Err(ValidationError::FieldType { index, field, expected: Expected::String });
        }
    }

    if obj.get(LINE_NUMBER_FIELD).map_or(true, |v| !is_integer(v)) {
        return Err(ValidationError::FieldType { index, field: LINE_NUMBER_FIELD, expected: Expected::Integer });
    }
    // The checks above cover every field ReportItem reads.
    ReportItem::deserialize(item).map_err(ValidationError::Parse)
}

/// Required names absent from `obj`, sorted.
fn missing_fields(obj: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS.iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// Bool is its own variant, so `true` never counts; neither does `5.0`.
fn is_integer(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n.is_i64() || n.is_u64())
}

fn as_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

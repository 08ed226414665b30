// report/src/report.rs

use serde::Deserialize;

/// Every item must carry all of these keys; extra keys are ignored.
pub const REQUIRED_FIELDS: &[&str] = &[
    "title", "description", "deepLink", "filePath",
    "lineNumber", "confidence", "rationale", "context", "language",
];

/// String-typed fields, in the order they are checked.
pub const TEXT_FIELDS: &[&str] = &[
    "title", "description", "deepLink", "filePath", "rationale", "context", "language",
];

pub const LINE_NUMBER_FIELD: &str = "lineNumber";
pub const CONFIDENCE_FIELD: &str = "confidence";

/// Confidence score, inclusive range [MIN, MAX].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "i64")]
pub struct Confidence(u8);

impl Confidence {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 3;

    pub fn new(score: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&score).then(|| Self(score as u8))
    }
    pub fn get(self) -> u8 { self.0 }
}

impl TryFrom<i64> for Confidence {
    type Error = String;
    fn try_from(v: i64) -> Result<Self, Self::Error> {
        Self::new(v).ok_or_else(|| format!("confidence {} outside {}..={}", v, Self::MIN, Self::MAX))
    }
}

/// One finding in a TODO report.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    pub title: String,
    pub description: String,
    pub deep_link: String,
    pub file_path: String,
    /// Any JSON integer: i64 or u64 range.
    pub line_number: i128,
    pub confidence: Confidence,
    pub rationale: String,
    pub context: String,
    pub language: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Report {
    pub items: Vec<ReportItem>,
}

impl Report {
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_fields_are_required_fields() {
        for f in TEXT_FIELDS {
            assert!(REQUIRED_FIELDS.contains(f), "{f} not required");
        }
        assert_eq!(REQUIRED_FIELDS.len(), TEXT_FIELDS.len() + 2);
    }

    #[test]
    fn confidence_bounds() {
        assert!(Confidence::new(0).is_none());
        assert_eq!(Confidence::new(1).map(Confidence::get), Some(1));
        assert_eq!(Confidence::new(3).map(Confidence::get), Some(3));
        assert!(Confidence::new(4).is_none());
        assert!(Confidence::new(-1).is_none());
    }

    #[test]
    fn typed_report_uses_camel_case_keys() {
        let v = json!([{
            "title": "t", "description": "d", "deepLink": "l", "filePath": "f",
            "lineNumber": 5, "confidence": 2, "rationale": "r", "context": "c",
            "language": "py", "extra": true
        }]);
        let report: Report = serde_json::from_value(v).unwrap();
        assert_eq!(report.len(), 1);
        let item = &report.items[0];
        assert_eq!(item.deep_link, "l");
        assert_eq!(item.file_path, "f");
        assert_eq!(item.line_number, 5);
        assert_eq!(item.confidence.get(), 2);
    }

    #[test]
    fn line_number_holds_u64_range() {
        let v = json!([{
            "title": "t", "description": "d", "deepLink": "l", "filePath": "f",
            "lineNumber": u64::MAX, "confidence": 1, "rationale": "r", "context": "c",
            "language": "py"
        }]);
        let report: Report = serde_json::from_value(v).unwrap();
        assert_eq!(report.items[0].line_number, u64::MAX as i128);
        assert!(!report.is_empty());
    }

    #[test]
    fn typed_report_rejects_out_of_range_confidence() {
        let v = json!([{
            "title": "t", "description": "d", "deepLink": "l", "filePath": "f",
            "lineNumber": 5, "confidence": 9, "rationale": "r", "context": "c",
            "language": "py"
        }]);
        assert!(serde_json::from_value::<Report>(v).is_err());
    }
}

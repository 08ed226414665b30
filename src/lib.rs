pub mod report;
pub mod error;
pub mod validate;
pub mod schema;
pub mod cli;

pub use report::{Report, ReportItem, Confidence, REQUIRED_FIELDS, TEXT_FIELDS};
pub use error::{ValidationError, Expected};
pub use validate::{ReportValidator, Outcome};
pub use schema::{report_schema, REPORT_SCHEMA};

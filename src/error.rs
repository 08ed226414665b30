use thiserror::Error;

/// Why a report was rejected. `Display` is the diagnostic printed after `Error: `.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Could not read file - {0}")]
    Read(#[source] std::io::Error),

    #[error("Invalid JSON - {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Root element must be a JSON array.")]
    RootShape,

    #[error("Item at index {index} is not an object.")]
    ItemShape { index: usize },

    #[error("Item at index {index} missing keys: {}", .missing.join(", "))]
    MissingFields { index: usize, missing: Vec<&'static str> },

    #[error("Item at index {index} has invalid confidence score.")]
    InvalidConfidence { index: usize },

    #[error("Item at index {index} field '{field}' is not {expected}.")]
    FieldType { index: usize, field: &'static str, expected: Expected },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected { String, Integer }

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::String => "a string",
            Self::Integer => "an integer",
        })
    }
}

impl ValidationError {
    /// Index of the offending item, when the failure is item-scoped.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::ItemShape { index }
            | Self::MissingFields { index, .. }
            | Self::InvalidConfidence { index }
            | Self::FieldType { index, .. } => Some(*index),
            Self::Read(_) | Self::Parse(_) | Self::RootShape => None,
        }
    }
}

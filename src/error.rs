//! Error taxonomy for document and tree operations
//!
//! Every failure produced by an update handler is one of these. The
//! `Display` impl carries the developer-facing detail that goes to the log;
//! [`EditorError::user_message`] is the text shown in the error modal.

use thiserror::Error;

/// Failures surfaced to the user through the error modal
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Malformed YAML text
    #[error("YAML parse error: {detail}")]
    Parse { detail: String },

    /// Fetch failed or the server answered with a non-2xx status
    #[error("failed to load {url}: {detail}")]
    Network { url: String, detail: String },

    /// Local file could not be read
    #[error("failed to read {name}: {detail}")]
    Read { name: String, detail: String },

    /// Tree could not be serialized back to YAML
    #[error("YAML encoding error: {detail}")]
    Encoding { detail: String },

    /// Save attempted with nothing loaded
    #[error("no document loaded")]
    NoData,

    /// Rename target already exists in the mapping
    #[error("duplicate key {key:?}")]
    DuplicateKey { key: String },

    /// Value kind name not in the closed set
    #[error("unknown value kind {kind:?}")]
    InvalidValueKind { kind: String },

    /// Selection path does not lead to a mapping
    #[error("no mapping at path {path}")]
    NotAMapping { path: String },

    /// Replacement value could not be coerced for the target
    #[error("invalid value {input:?} for key {key:?}")]
    InvalidValue { key: String, input: String },
}

impl EditorError {
    /// Message shown to the user in the error modal
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse { .. } => "Error parsing YAML. See log for details.".to_string(),
            Self::Network { .. } => "Failed to load YAML from URL. See log for details.".to_string(),
            Self::Read { name, .. } => format!("Failed to read file \"{}\".", name),
            Self::Encoding { .. } => {
                "Error converting data to YAML. See log for details.".to_string()
            }
            Self::NoData => "No data to save.".to_string(),
            Self::DuplicateKey { key } => format!("Key \"{}\" already exists.", key),
            Self::InvalidValueKind { kind } => {
                format!(
                    "Unknown value type \"{}\" (expected string, number, boolean or object).",
                    kind
                )
            }
            Self::NotAMapping { path } => format!("\"{}\" is not an object.", path),
            Self::InvalidValue { key, input } => {
                format!("\"{}\" is not a valid value for \"{}\".", input, key)
            }
        }
    }
}

//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod mutations;
pub mod node;
pub mod ui;

pub use document::{
    edited_file_name, is_valid_url, url_file_name, Document, DocumentState, SavedDocument,
};
pub use mutations::{add_key, remove_key, rename_key, set_element, set_value, ValueKind};
pub use node::{Mapping, Node, NodePath, Scalar};
pub use ui::{ErrorModal, TransientMessage, UiState};

use crate::config::EditorConfig;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The document being edited
    pub document: Document,
    /// UI state (status line, error modal, URL input)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: Document::new(),
            ui: UiState::new(),
            config,
        }
    }

    /// Model with `text` already loaded under `source_name`
    pub fn with_text(text: &str, source_name: Option<&str>) -> Self {
        let mut model = Self::new(EditorConfig::default());
        model.document = Document::from_text(text, source_name.map(str::to_string));
        model
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

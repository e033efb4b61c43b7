//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::error::EditorError;
use crate::model::{NodePath, ValueKind};

/// Tree editing messages
///
/// Each carries the path of the mapping it targets, so there is no
/// remembered "current selection" to go stale.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeMsg {
    /// Append a fresh key with a default value of `kind`
    AddKey { path: NodePath, kind: ValueKind },
    /// Delete `key` from the mapping at `path`
    RemoveKey { path: NodePath, key: String },
    /// Rename a key in the mapping at `path`
    RenameKey {
        path: NodePath,
        old_key: String,
        new_key: String,
    },
    /// Replace a scalar value (mapping key, or sequence index) under `path`
    SetValue {
        path: NodePath,
        key: String,
        input: String,
    },
}

/// UI-specific messages (status line, error modal, URL field)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Set status line message
    SetStatus(String),
    /// Update the URL input field
    SetUrlInput(String),
    /// Surface an error raised outside the update loop (e.g. bad input)
    ReportError(EditorError),
    /// Close the error modal
    DismissError,
}

/// Application-level messages (load/save lifecycle)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Read a local file and load it
    OpenFile(PathBuf),
    /// File read completed (async result)
    FileLoaded {
        generation: u64,
        name: String,
        result: Result<String, String>,
    },
    /// Load text that is already in memory
    LoadText {
        text: String,
        source_name: Option<String>,
    },
    /// Fetch the URL in the input field and load it
    LoadFromUrl,
    /// URL fetch completed (async result)
    UrlLoaded {
        generation: u64,
        url: String,
        result: Result<String, String>,
    },
    /// Serialize and download to the configured directory
    SaveFile,
    /// Download completed (async result)
    DownloadCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Reset to the empty state
    CloseForm,
    /// Quit the application
    Quit,

    // === File Dialog Messages ===
    /// User requested "Save As..." dialog
    SaveFileAs,
    /// Save As dialog returned a path (or None if cancelled)
    SaveFileAsDialogResult { path: Option<PathBuf> },
    /// User requested "Open File..." dialog
    OpenFileDialog,
    /// Open File dialog returned a path (or None if cancelled)
    OpenFileDialogResult { path: Option<PathBuf> },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Tree edits
    Tree(TreeMsg),
    /// UI messages
    Ui(UiMsg),
    /// App messages (load, save, close)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn add_key(path: NodePath, kind: ValueKind) -> Self {
        Msg::Tree(TreeMsg::AddKey { path, kind })
    }

    pub fn remove_key(path: NodePath, key: impl Into<String>) -> Self {
        Msg::Tree(TreeMsg::RemoveKey {
            path,
            key: key.into(),
        })
    }

    pub fn rename_key(path: NodePath, old_key: impl Into<String>, new_key: impl Into<String>) -> Self {
        Msg::Tree(TreeMsg::RenameKey {
            path,
            old_key: old_key.into(),
            new_key: new_key.into(),
        })
    }

    pub fn load_text(text: impl Into<String>, source_name: Option<&str>) -> Self {
        Msg::App(AppMsg::LoadText {
            text: text.into(),
            source_name: source_name.map(str::to_string),
        })
    }
}

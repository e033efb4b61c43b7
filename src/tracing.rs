//! Tracing setup and state-transition diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,document=debug` - scoped filtering
//! - `RUST_LOG=yaml_editor::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/yaml-editor/logs/yaml-editor.log` with daily
//! rotation. File logging uses debug level, so parse and network failures
//! that the error modal only summarizes are always recorded in full.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{AppModel, DocumentState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it does not interleave with the
/// rendered tree on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::create_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of document state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub state: DocumentState,
    pub generation: u64,
    pub top_level_len: usize,
    pub source_name: Option<String>,
    pub modal_open: bool,
}

impl StateSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            state: model.document.state(),
            generation: model.document.generation,
            top_level_len: model.document.top_level_len(),
            source_name: model.document.source_name.clone(),
            modal_open: model.ui.has_error_modal(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.generation != other.generation {
            changes.push(format!(
                "generation: {} → {}",
                self.generation, other.generation
            ));
        }
        if self.top_level_len != other.top_level_len {
            changes.push(format!(
                "entries: {} → {}",
                self.top_level_len, other.top_level_len
            ));
        }
        if self.source_name != other.source_name {
            changes.push(format!(
                "source: {:?} → {:?}",
                self.source_name, other.source_name
            ));
        }
        if self.modal_open != other.modal_open {
            let status = if other.modal_open { "opened" } else { "closed" };
            changes.push(format!("error modal {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

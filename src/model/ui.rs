//! UI state - status line, error modal and the URL input field

use std::time::{Duration, Instant};

use crate::model::document::is_valid_url;

/// Error notification shown on top of the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorModal {
    pub message: String,
}

/// Status line message with auto-expiry
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Transient message with auto-expiry (download results)
    pub transient_message: Option<TransientMessage>,
    /// Error modal, if one is open
    pub error_modal: Option<ErrorModal>,
    /// Contents of the URL input field
    pub url_input: String,
    /// Whether a save dialog or download is in flight
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the error modal with `message`
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_modal = Some(ErrorModal {
            message: message.into(),
        });
    }

    pub fn hide_error(&mut self) {
        self.error_modal = None;
    }

    pub fn has_error_modal(&self) -> bool {
        self.error_modal.is_some()
    }

    /// The load-from-URL action is only available for a valid absolute URL
    pub fn can_load_url(&self) -> bool {
        is_valid_url(&self.url_input)
    }

    /// Set the status line; replaces any transient message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.transient_message = None;
    }

    pub fn set_transient(&mut self, text: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(text, duration));
    }

    /// Text for the status line: an unexpired transient message wins
    pub fn status_text(&self) -> &str {
        match &self.transient_message {
            Some(msg) if !msg.is_expired() => &msg.text,
            _ => &self.status_message,
        }
    }
}

//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod tree;
mod ui;

use crate::commands::Cmd;
use crate::error::EditorError;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use tree::update_tree;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Tree(m) => tree::update_tree(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Record a failure: log the detail, keep it on the document, open the modal
///
/// This is the single exit for every error an operation produces.
pub(crate) fn report_error(model: &mut AppModel, error: EditorError) {
    tracing::error!(target: "document", error = %error, "operation failed");
    model.ui.show_error(error.user_message());
    model.document.error = Some(error);
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after document state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = StateSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "document", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Message payloads can hold whole documents, so long variants are cut.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    const MAX_LEN: usize = 120;
    let name = match msg {
        Msg::Tree(m) => format!("Tree::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    };
    if name.chars().count() > MAX_LEN {
        let cut: String = name.chars().take(MAX_LEN).collect();
        format!("{}…", cut)
    } else {
        name
    }
}

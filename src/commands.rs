//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds any result back in as a message.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the editor
    Redraw,
    /// Read a file off-thread; sends `AppMsg::FileLoaded`
    ReadFile { path: PathBuf, generation: u64 },
    /// GET a URL off-thread; sends `AppMsg::UrlLoaded`
    FetchUrl { url: String, generation: u64 },
    /// Write serialized YAML to disk; sends `AppMsg::DownloadCompleted`
    Download { path: PathBuf, content: String },
    /// Bring the editor into view once the next render has happened
    RevealEditor,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // File dialogs
    /// Show native open file dialog
    ShowOpenFileDialog {
        /// Starting directory for the dialog
        start_dir: Option<PathBuf>,
    },
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: Option<PathBuf>,
    },

    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::Quit => false,
            Cmd::Redraw | Cmd::RevealEditor => true,
            Cmd::ReadFile { .. } | Cmd::FetchUrl { .. } => true,
            Cmd::Download { .. } => false,
            Cmd::ShowOpenFileDialog { .. } | Cmd::ShowSaveFileDialog { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => Vec::new(),
            other => vec![other],
        }
    }
}

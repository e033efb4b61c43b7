//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/yaml-editor/config.yaml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Where saved documents are written (defaults to the user's download dir)
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Global timeout for URL loads; none means wait for the transport
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// Jump to the editor after a successful load
    #[serde(default = "default_reveal_on_load")]
    pub reveal_on_load: bool,
}

fn default_reveal_on_load() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            fetch_timeout_secs: None,
            reveal_on_load: default_reveal_on_load(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Directory downloads are written to
    ///
    /// Falls back to the platform download directory, then the working
    /// directory.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Loading a file or URL at startup
//! - Overriding the download directory
//! - A global timeout for URL loads

use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::config::EditorConfig;

/// A small visual editor for YAML documents
#[derive(Parser, Debug)]
#[command(name = "yaml-editor", version, about = "A small visual editor for YAML documents")]
pub struct CliArgs {
    /// File path or absolute URL to load
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Directory saved documents are written to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Give up on URL loads after SECS seconds
    #[arg(short = 't', long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Do not jump to the editor after a load
    #[arg(long)]
    pub no_reveal: bool,
}

/// The startup mode determines what to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with nothing loaded
    Empty,
    /// Read a local file
    File(PathBuf),
    /// Fetch a URL
    Url(String),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// What to load
    pub mode: StartupMode,
    /// Overrides `download_dir`
    pub out_dir: Option<PathBuf>,
    /// Overrides `fetch_timeout_secs`
    pub timeout_secs: Option<u64>,
    /// Forces `reveal_on_load` off
    pub no_reveal: bool,
}

/// True if `source` should be fetched rather than read from disk
///
/// Single-letter schemes are Windows drive letters (`C:\file.yaml`).
fn looks_like_url(source: &str) -> bool {
    Url::parse(source)
        .map(|url| url.scheme().len() > 1)
        .unwrap_or(false)
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.timeout == Some(0) {
            return Err("--timeout must be at least 1 second".to_string());
        }

        if let Some(dir) = &self.out_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(format!("{} is not a directory", dir.display()));
            }
        }

        let mode = match self.source {
            None => StartupMode::Empty,
            Some(source) if source.trim().is_empty() => StartupMode::Empty,
            Some(source) if looks_like_url(&source) => StartupMode::Url(source),
            Some(source) => StartupMode::File(PathBuf::from(source)),
        };

        Ok(StartupConfig {
            mode,
            out_dir: self.out_dir,
            timeout_secs: self.timeout,
            no_reveal: self.no_reveal,
        })
    }
}

impl StartupConfig {
    /// Layer the command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(dir) = &self.out_dir {
            config.download_dir = Some(dir.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.fetch_timeout_secs = Some(secs);
        }
        if self.no_reveal {
            config.reveal_on_load = false;
        }
    }
}

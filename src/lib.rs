//! YAML Editor - Elm-style editor for YAML documents
//!
//! This crate provides the document model, the YAML codec and the
//! update/command loop for a small key/value editor. The binary wraps it in
//! a line-oriented prompt.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod http;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::EditorError;
pub use messages::Msg;
pub use model::AppModel;

//! Runtime module - prompt loop and side-effect execution
//!
//! - `app` - owns the model, runs commands on worker threads, renders
//! - `input` - prompt line to message mapping

pub mod app;
pub mod input;

pub use app::App;

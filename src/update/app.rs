//! App message handlers (load, save, close)

use std::time::Duration;

use super::report_error;
use crate::commands::Cmd;
use crate::error::EditorError;
use crate::messages::AppMsg;
use crate::model::{url_file_name, AppModel};

/// How long a download result stays on the status line
const DOWNLOAD_NOTICE: Duration = Duration::from_secs(5);

/// Handle app messages (load/save lifecycle)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::OpenFile(path) => {
            let generation = model.document.begin_load();
            model.ui.set_status("Loading...");
            Some(Cmd::ReadFile { path, generation })
        }

        AppMsg::FileLoaded {
            generation,
            name,
            result,
        } => {
            if !model.document.is_current(generation) {
                tracing::debug!(generation, %name, "discarding stale file load");
                return None;
            }
            match result {
                Ok(text) => Some(load_text(model, &text, Some(name))),
                Err(detail) => {
                    let error = EditorError::Read {
                        name: name.clone(),
                        detail,
                    };
                    model.document.fail_load(error.clone(), Some(name));
                    report_error(model, error);
                    model.ui.set_status("");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::LoadText { text, source_name } => {
            model.document.begin_load();
            Some(load_text(model, &text, source_name))
        }

        AppMsg::LoadFromUrl => {
            if !model.ui.can_load_url() {
                tracing::debug!(input = %model.ui.url_input, "load from URL unavailable");
                return None;
            }
            let url = model.ui.url_input.trim().to_string();
            let generation = model.document.begin_load();
            model.document.source_name = url_file_name(&url);
            model.ui.set_status("Loading...");
            Some(Cmd::FetchUrl { url, generation })
        }

        AppMsg::UrlLoaded {
            generation,
            url,
            result,
        } => {
            if !model.document.is_current(generation) {
                tracing::debug!(generation, %url, "discarding stale URL load");
                return None;
            }
            match result {
                Ok(text) => Some(load_text(model, &text, url_file_name(&url))),
                Err(detail) => {
                    let error = EditorError::Network { url: url.clone(), detail };
                    model.document.fail_load(error.clone(), url_file_name(&url));
                    report_error(model, error);
                    model.ui.set_status("");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::SaveFile => match model.document.save_to_text() {
            Ok(saved) => {
                let path = model
                    .config
                    .resolved_download_dir()
                    .join(&saved.file_name);
                model.ui.is_saving = true;
                model.ui.set_status("Saving...");
                Some(Cmd::Download {
                    path,
                    content: saved.content,
                })
            }
            Err(e) => {
                report_error(model, e);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveFileAs => match model.document.save_to_text() {
            Ok(saved) => {
                let suggested = model
                    .config
                    .resolved_download_dir()
                    .join(&saved.file_name);
                Some(Cmd::ShowSaveFileDialog {
                    suggested_path: Some(suggested),
                })
            }
            Err(e) => {
                report_error(model, e);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveFileAsDialogResult { path } => {
            let Some(path) = path else {
                model.ui.set_status("Save cancelled");
                return Some(Cmd::Redraw);
            };
            match model.document.save_to_text() {
                Ok(saved) => {
                    model.ui.is_saving = true;
                    model.ui.set_status("Saving...");
                    Some(Cmd::Download {
                        path,
                        content: saved.content,
                    })
                }
                Err(e) => {
                    report_error(model, e);
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::DownloadCompleted { path, result } => {
            model.ui.is_saving = false;
            model.ui.set_status("");
            match result {
                Ok(()) => {
                    tracing::info!("Saved {}", path.display());
                    model
                        .ui
                        .set_transient(format!("Saved: {}", path.display()), DOWNLOAD_NOTICE);
                }
                Err(e) => {
                    tracing::warn!("Failed to write {}: {}", path.display(), e);
                    model.ui.set_transient(format!("Error: {}", e), DOWNLOAD_NOTICE);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFileDialog => Some(Cmd::ShowOpenFileDialog {
            start_dir: model
                .config
                .download_dir
                .clone()
                .or_else(|| std::env::current_dir().ok()),
        }),

        AppMsg::OpenFileDialogResult { path } => match path {
            Some(path) => update_app(model, AppMsg::OpenFile(path)),
            None => None,
        },

        AppMsg::CloseForm => {
            model.document.close();
            model.ui.url_input.clear();
            model.ui.hide_error();
            model.ui.set_status("");
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Parse `text` into the document and pick the follow-up commands
fn load_text(model: &mut AppModel, text: &str, source_name: Option<String>) -> Cmd {
    match model.document.load_from_text(text, source_name) {
        Ok(()) => {
            let label = model
                .document
                .source_name
                .clone()
                .unwrap_or_else(|| "untitled".to_string());
            tracing::info!(source = %label, bytes = text.len(), "document loaded");
            model.ui.set_status(format!("Loaded: {}", label));
            if model.config.reveal_on_load {
                Cmd::batch(vec![Cmd::Redraw, Cmd::RevealEditor])
            } else {
                Cmd::Redraw
            }
        }
        Err(e) => {
            report_error(model, e);
            model.ui.set_status("");
            Cmd::Redraw
        }
    }
}

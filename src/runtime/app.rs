//! Application runtime - owns the model and executes commands
//!
//! One thread owns the model. File reads, URL fetches, downloads and native
//! dialogs run on short-lived worker threads and report back over an mpsc
//! channel. The prompt loop waits for outstanding workers before rendering,
//! so each command line is followed by a single consistent screen.

use std::io::{BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use super::input::{help_text, parse_line, InputAction};
use crate::cli::StartupMode;
use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::config_paths;
use crate::http::{self, HttpFetcher, UreqFetcher};
use crate::messages::{AppMsg, Msg, UiMsg};
use crate::model::AppModel;
use crate::update::update;
use crate::view;

const PROMPT: &str = "> ";
const WORKER_PANICKED: &str = "worker panicked";

/// Name a file is known by once loaded (its file name, verbatim)
fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a file as text, replacing invalid UTF-8 sequences
fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub struct App {
    pub model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    fetcher: Arc<dyn HttpFetcher>,
    /// Workers spawned whose result message has not been applied yet
    in_flight: usize,
    /// A `RevealEditor` is waiting for the next render
    reveal_pending: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: EditorConfig) -> Self {
        let timeout = config.fetch_timeout_secs.map(Duration::from_secs);
        Self::with_fetcher(config, Arc::new(UreqFetcher::new(timeout)))
    }

    /// Runtime with a caller-supplied network layer
    pub fn with_fetcher(config: EditorConfig, fetcher: Arc<dyn HttpFetcher>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: AppModel::new(config),
            msg_tx,
            msg_rx,
            fetcher,
            in_flight: 0,
            reveal_pending: false,
            should_quit: false,
        }
    }

    /// Kick off the initial load chosen on the command line
    pub fn start(&mut self, mode: &StartupMode) {
        match mode {
            StartupMode::Empty => {}
            StartupMode::File(path) => {
                self.dispatch(Msg::App(AppMsg::OpenFile(path.clone())));
            }
            StartupMode::Url(url) => {
                self.dispatch(Msg::Ui(UiMsg::SetUrlInput(url.clone())));
                self.dispatch(Msg::App(AppMsg::LoadFromUrl));
            }
        }
        self.wait_for_pending();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one message and execute the resulting command
    ///
    /// Returns true if the screen should be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    /// Block until every spawned worker has reported back
    ///
    /// Results may spawn further work (a dialog result starts a file read),
    /// so this keeps draining until nothing is outstanding.
    pub fn wait_for_pending(&mut self) -> bool {
        let mut needs_redraw = false;
        while self.in_flight > 0 {
            let Ok(msg) = self.msg_rx.recv() else {
                tracing::error!("worker channel closed with {} pending", self.in_flight);
                self.in_flight = 0;
                break;
            };
            self.in_flight -= 1;
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    /// Write the current screen, then perform a pending reveal
    pub fn render<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        out.write_all(view::render(&self.model).as_bytes())?;
        if std::mem::take(&mut self.reveal_pending) && self.model.document.tree.is_some() {
            writeln!(out, ">> {}", view::editor_header(&self.model))?;
        }
        out.flush()
    }

    /// Read prompt lines from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.render(out).context("Failed to write to terminal")?;

        let mut lines = input.lines();
        while !self.should_quit {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                tracing::debug!("end of input");
                break;
            };
            let line = line.context("Failed to read command")?;

            match parse_line(&line) {
                InputAction::Empty => {}
                InputAction::Show => self.render(out)?,
                InputAction::Help => {
                    write!(out, "{}", help_text())?;
                    if let Some(logs) = config_paths::logs_dir() {
                        writeln!(out, "Logs: {}", logs.display())?;
                    }
                }
                InputAction::Usage(usage) => writeln!(out, "usage: {}", usage)?,
                InputAction::Unknown(command) => {
                    writeln!(out, "Unknown command: {} (try `help`)", command)?
                }
                InputAction::Dispatch(msgs) => {
                    let mut needs_redraw = false;
                    for msg in msgs {
                        needs_redraw |= self.dispatch(msg);
                    }
                    needs_redraw |= self.wait_for_pending();
                    if needs_redraw && !self.should_quit {
                        self.render(out)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Spawn a worker whose result is delivered as a message
    ///
    /// `fallback` is sent instead if the worker panics, so `in_flight`
    /// always drains.
    fn spawn_worker<F>(&mut self, fallback: Msg, work: F)
    where
        F: FnOnce() -> Msg + Send + 'static,
    {
        let tx = self.msg_tx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let msg = panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|_| {
                tracing::error!("worker panicked");
                fallback
            });
            let _ = tx.send(msg);
        });
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::ReadFile { path, generation } => {
                let name = file_display_name(&path);
                let fallback = Msg::App(AppMsg::FileLoaded {
                    generation,
                    name: name.clone(),
                    result: Err(WORKER_PANICKED.to_string()),
                });
                self.spawn_worker(fallback, move || {
                    let result = read_text_lossy(&path).map_err(|e| e.to_string());
                    Msg::App(AppMsg::FileLoaded {
                        generation,
                        name,
                        result,
                    })
                });
            }
            Cmd::FetchUrl { url, generation } => {
                let fetcher = Arc::clone(&self.fetcher);
                let fallback = Msg::App(AppMsg::UrlLoaded {
                    generation,
                    url: url.clone(),
                    result: Err(WORKER_PANICKED.to_string()),
                });
                self.spawn_worker(fallback, move || {
                    let result = http::fetch_text(fetcher.as_ref(), &url);
                    Msg::App(AppMsg::UrlLoaded {
                        generation,
                        url,
                        result,
                    })
                });
            }
            Cmd::Download { path, content } => {
                let fallback = Msg::App(AppMsg::DownloadCompleted {
                    path: path.clone(),
                    result: Err(WORKER_PANICKED.to_string()),
                });
                self.spawn_worker(fallback, move || {
                    let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                    Msg::App(AppMsg::DownloadCompleted { path, result })
                });
            }
            Cmd::RevealEditor => self.reveal_pending = true,
            Cmd::Quit => self.should_quit = true,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }

            // =====================================================================
            // File Dialogs (using rfd)
            // =====================================================================
            Cmd::ShowOpenFileDialog { start_dir } => {
                let fallback = Msg::App(AppMsg::OpenFileDialogResult { path: None });
                self.spawn_worker(fallback, move || {
                    let mut dlg = rfd::FileDialog::new();
                    if let Some(dir) = start_dir {
                        dlg = dlg.set_directory(dir);
                    }
                    let path = dlg.pick_file();
                    Msg::App(AppMsg::OpenFileDialogResult { path })
                });
            }

            Cmd::ShowSaveFileDialog { suggested_path } => {
                let fallback = Msg::App(AppMsg::SaveFileAsDialogResult { path: None });
                self.spawn_worker(fallback, move || {
                    let mut dlg = rfd::FileDialog::new();
                    if let Some(ref path) = suggested_path {
                        if let Some(dir) = path.parent() {
                            dlg = dlg.set_directory(dir);
                        }
                        if let Some(name) = path.file_name() {
                            dlg = dlg.set_file_name(name.to_string_lossy());
                        }
                    }
                    let path = dlg.save_file();
                    Msg::App(AppMsg::SaveFileAsDialogResult { path })
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchResponse;
    use crate::model::DocumentState;

    struct NoNetwork;

    impl HttpFetcher for NoNetwork {
        fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
            anyhow::bail!("network disabled in tests: {}", url)
        }
    }

    fn test_app() -> App {
        App::with_fetcher(EditorConfig::default(), Arc::new(NoNetwork))
    }

    #[test]
    fn test_file_display_name_is_verbatim() {
        assert_eq!(file_display_name(Path::new("/tmp/dir/Test.YAML")), "Test.YAML");
        assert_eq!(file_display_name(Path::new("notes")), "notes");
    }

    #[test]
    fn test_reveal_is_deferred_until_render() {
        let mut app = test_app();
        app.dispatch(Msg::load_text("key: value", Some("test.yaml")));
        assert!(app.reveal_pending);

        let mut out = Vec::new();
        app.render(&mut out).unwrap();
        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains(">> --- test.yaml ---"));
        assert!(!app.reveal_pending);

        let mut again = Vec::new();
        app.render(&mut again).unwrap();
        assert!(!String::from_utf8(again).unwrap().contains(">>"));
    }

    #[test]
    fn test_failed_fetch_reports_error() {
        let mut app = test_app();
        app.start(&StartupMode::Url("http://test.com/test.yaml".into()));
        assert_eq!(app.model.document.state(), DocumentState::Error);
        assert!(app.model.ui.has_error_modal());
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_panicking_worker_still_reports_back() {
        let mut app = test_app();
        app.spawn_worker(Msg::Ui(UiMsg::SetStatus("worker failed".into())), || {
            panic!("boom")
        });

        app.wait_for_pending();

        assert_eq!(app.in_flight, 0);
        assert_eq!(app.model.ui.status_text(), "worker failed");
    }

    #[test]
    fn test_quit_stops_run_loop() {
        let mut app = test_app();
        let mut out = Vec::new();
        app.run("quit\nadd string\n".as_bytes(), &mut out).unwrap();
        assert!(app.should_quit());
        assert!(app.model.document.tree.is_none());
    }

    #[test]
    fn test_run_handles_unknown_and_help() {
        let mut app = test_app();
        let mut out = Vec::new();
        app.run("frob\nhelp\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command: frob"));
        assert!(text.contains("set PATH KEY VALUE"));
    }
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use yaml_editor::commands::Cmd;
use yaml_editor::config::EditorConfig;
use yaml_editor::http::{FetchResponse, HttpFetcher};
use yaml_editor::messages::{AppMsg, Msg, UiMsg};
use yaml_editor::model::{AppModel, Node, NodePath};
use yaml_editor::update::update;

/// Create a test model with `text` loaded under `source_name`
pub fn test_model(text: &str, source_name: Option<&str>) -> AppModel {
    AppModel::with_text(text, source_name)
}

/// Model whose saves go to `dir`
pub fn model_with_download_dir(dir: &std::path::Path) -> AppModel {
    AppModel::new(EditorConfig {
        download_dir: Some(dir.to_path_buf()),
        ..EditorConfig::default()
    })
}

/// Start a URL load and return the generation the runtime would tag it with
pub fn begin_url_load(model: &mut AppModel, url: &str) -> u64 {
    update(model, Msg::Ui(UiMsg::SetUrlInput(url.to_string())));
    match update(model, Msg::App(AppMsg::LoadFromUrl)) {
        Some(Cmd::FetchUrl { generation, .. }) => generation,
        other => panic!("expected FetchUrl, got {:?}", other),
    }
}

/// Value at a dotted path in the loaded tree
pub fn node_at<'a>(model: &'a AppModel, path: &str) -> Option<&'a Node> {
    model.document.tree.as_ref()?.get(&NodePath::parse(path))
}

/// Top-level keys of the loaded tree, in order
pub fn top_keys(model: &AppModel) -> Vec<String> {
    model
        .document
        .tree
        .as_ref()
        .and_then(Node::as_mapping)
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

/// Fetcher serving canned bodies by URL; unknown URLs get a 404
#[derive(Default)]
pub struct StubFetcher {
    routes: Vec<(String, FetchResponse)>,
    pub requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.push((
            url.to_string(),
            FetchResponse {
                status,
                body: body.to_string(),
            },
        ));
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl HttpFetcher for StubFetcher {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self
            .routes
            .iter()
            .find(|(route, _)| route == url)
            .map(|(_, response)| response.clone())
            .unwrap_or(FetchResponse {
                status: 404,
                body: String::new(),
            }))
    }
}

/// Fetcher whose transport always fails
pub struct OfflineFetcher;

impl HttpFetcher for OfflineFetcher {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
        anyhow::bail!("connection refused: {}", url)
    }
}

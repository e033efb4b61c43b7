//! Document model - raw text, parsed tree and load/save state

use url::Url;

use super::node::Node;
use crate::codec;
use crate::error::EditorError;

/// Fallback name when the document has no source name
pub const DEFAULT_FILE_NAME: &str = "edited.yaml";
/// Marker inserted into the output file name
pub const EDITED_SUFFIX: &str = "_edited";

/// Observable state of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Nothing loaded
    Empty,
    /// A load is in flight
    Loading,
    /// Tree parsed and editable
    Loaded,
    /// Last load failed; raw text kept for inspection
    Error,
}

/// Serialized output ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub file_name: String,
    pub content: String,
}

/// The single editable unit of state
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Last loaded text
    pub raw_text: String,
    /// Parsed tree (None if nothing parsed or the last parse failed)
    pub tree: Option<Node>,
    /// Name the output file is derived from
    pub source_name: Option<String>,
    /// Last failure
    pub error: Option<EditorError>,
    /// Load request counter, used to drop stale completions
    pub generation: u64,
    /// Whether a load is in flight
    pub is_loading: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document by parsing `text` immediately
    pub fn from_text(text: &str, source_name: Option<String>) -> Self {
        let mut doc = Self::new();
        // The parse outcome is kept on the document itself
        let _ = doc.load_from_text(text, source_name);
        doc
    }

    pub fn state(&self) -> DocumentState {
        if self.is_loading {
            DocumentState::Loading
        } else if self.tree.is_some() {
            DocumentState::Loaded
        } else if self.error.is_some() {
            DocumentState::Error
        } else {
            DocumentState::Empty
        }
    }

    /// Begin a new load: clears the previous error and returns the new generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.error = None;
        self.is_loading = true;
        self.generation
    }

    /// True if a completion tagged with `generation` belongs to the newest load
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Set the raw text and parse it
    ///
    /// On failure the tree is cleared and the error recorded; the raw text is
    /// kept either way. The source name is always overwritten.
    pub fn load_from_text(
        &mut self,
        text: &str,
        source_name: Option<String>,
    ) -> Result<(), EditorError> {
        self.is_loading = false;
        self.raw_text = text.to_string();
        self.source_name = source_name.filter(|name| !name.is_empty());
        match codec::parse(text) {
            Ok(tree) => {
                self.tree = Some(tree);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.tree = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Record a failed load that never produced text to parse
    pub fn fail_load(&mut self, error: EditorError, source_name: Option<String>) {
        self.is_loading = false;
        self.tree = None;
        self.source_name = source_name.filter(|name| !name.is_empty());
        self.error = Some(error);
    }

    /// Serialize the tree and derive the output file name
    ///
    /// A document that is absent or parsed to nothing (empty text, `~`) has
    /// no data to save.
    pub fn save_to_text(&self) -> Result<SavedDocument, EditorError> {
        let tree = match &self.tree {
            Some(tree) if !tree.is_null() => tree,
            _ => return Err(EditorError::NoData),
        };
        let content = codec::serialize(tree)?;
        Ok(SavedDocument {
            file_name: edited_file_name(self.source_name.as_deref()),
            content,
        })
    }

    /// Reset to the initial empty state
    ///
    /// The generation moves forward so that loads still in flight are
    /// discarded when they complete.
    pub fn close(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    /// Number of top-level entries (mapping keys or sequence items)
    pub fn top_level_len(&self) -> usize {
        match &self.tree {
            Some(Node::Mapping(m)) => m.len(),
            Some(Node::Sequence(items)) => items.len(),
            Some(Node::Scalar(_)) => 1,
            None => 0,
        }
    }
}

/// Output file name: `_edited` inserted before the last `.`, or appended
///
/// `test.yaml` → `test_edited.yaml`, `notes` → `notes_edited`. Without a
/// source name the default `edited.yaml` goes through the same rule.
pub fn edited_file_name(source_name: Option<&str>) -> String {
    let name = source_name
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILE_NAME);
    match name.rfind('.') {
        Some(dot) => format!("{}{}{}", &name[..dot], EDITED_SUFFIX, &name[dot..]),
        None => format!("{}{}", name, EDITED_SUFFIX),
    }
}

/// True if `input` is a well-formed absolute URL
pub fn is_valid_url(input: &str) -> bool {
    !input.trim().is_empty() && Url::parse(input.trim()).is_ok()
}

/// Last path segment of a URL, used as the source name
pub fn url_file_name(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

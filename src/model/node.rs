//! Generic tree model - the parsed form of a YAML document
//!
//! A document is a tree of [`Node`]s. Mappings keep insertion order so that
//! re-serialization writes keys back in the order they were loaded (or added).

use std::fmt;

use indexmap::IndexMap;

use crate::error::EditorError;

/// Ordered mapping of unique string keys to child nodes
pub type Mapping = IndexMap<String, Node>;

/// Leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Interpret user input as a value of the same kind as `self`
    ///
    /// Booleans accept `true`/`false`, numbers accept anything that parses as
    /// an integer or float, strings take the input verbatim. A null slot
    /// takes the input as a string, matching a text field bound to an empty
    /// value.
    pub fn parse_like(&self, input: &str) -> Option<Scalar> {
        match self {
            Scalar::Bool(_) => match input.trim() {
                "true" => Some(Scalar::Bool(true)),
                "false" => Some(Scalar::Bool(false)),
                _ => None,
            },
            Scalar::Int(_) | Scalar::Float(_) => {
                let trimmed = input.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    Some(Scalar::Int(i))
                } else {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(Scalar::Float)
                }
            }
            Scalar::String(_) | Scalar::Null => Some(Scalar::String(input.to_string())),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::String(s) => write!(f, "{:?}", s),
        }
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<Node>),
}

impl Node {
    /// An empty mapping node (`{}`)
    pub fn empty_mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    /// Convenience constructor for string scalars
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::String(value.into()))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// True for a document that parsed to nothing (empty text or `~`)
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    /// Look up a descendant by path
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        path.segments().iter().try_fold(self, |node, seg| match node {
            Node::Mapping(m) => m.get(seg.as_str()),
            Node::Sequence(items) => seg.parse::<usize>().ok().and_then(|i| items.get(i)),
            Node::Scalar(_) => None,
        })
    }

    /// Look up a descendant by path, mutably
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = self;
        for seg in path.segments() {
            node = match node {
                Node::Mapping(m) => m.get_mut(seg.as_str())?,
                Node::Sequence(items) => items.get_mut(seg.parse::<usize>().ok()?)?,
                Node::Scalar(_) => return None,
            };
        }
        Some(node)
    }

    /// Resolve the mapping selected by `path`
    ///
    /// This is how mutation targets are chosen: the caller names the mapping
    /// explicitly rather than relying on a remembered selection.
    pub fn mapping_at_mut(&mut self, path: &NodePath) -> Result<&mut Mapping, EditorError> {
        self.get_mut(path)
            .and_then(Node::as_mapping_mut)
            .ok_or_else(|| EditorError::NotAMapping {
                path: path.to_string(),
            })
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

/// Explicit selection of a node, as a list of keys/indices from the root
///
/// Segments are interpreted against the node they are applied to: a key for
/// mappings, a decimal index for sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// The document root
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a dotted path; `.` or an empty string is the root
    ///
    /// A backslash escapes the next character, so a key containing a dot is
    /// written `app\.kubernetes\.io` and a literal backslash `\\`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text == "." {
            return Self::root();
        }
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => current.push(chars.next().unwrap_or('\\')),
                '.' => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);
        Self(segments)
    }

    /// Path to a child of this node
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Nesting depth (root is 0)
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for c in segment.chars() {
                if c == '.' || c == '\\' {
                    f.write_str("\\")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

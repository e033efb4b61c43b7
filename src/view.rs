//! Text rendering of the editor
//!
//! Produces the whole screen as a string: title, error modal, the key/value
//! tree (or the empty/loading/error placeholder), and the status line. Each
//! tree row ends with the path used to address it from the prompt, quoted
//! when it holds characters the prompt would split or unescape.

use std::fmt::Write;

use crate::model::{AppModel, DocumentState, Node, NodePath};

pub const TITLE: &str = "YAML Editor";

const INDENT: &str = "  ";

/// Render the full screen
pub fn render(model: &AppModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", TITLE);

    if let Some(modal) = &model.ui.error_modal {
        let _ = writeln!(out, "[!] {}  (type `ok` to dismiss)", modal.message);
    }

    match model.document.state() {
        DocumentState::Empty => {
            out.push_str("No document loaded. Use `open <file>` or `url <address>`.\n");
        }
        DocumentState::Loading => out.push_str("Loading...\n"),
        DocumentState::Error => {
            out.push_str("Document could not be loaded.\n");
            if !model.document.raw_text.is_empty() {
                out.push_str("--- raw text ---\n");
                for line in model.document.raw_text.lines() {
                    let _ = writeln!(out, "| {}", line);
                }
            }
        }
        DocumentState::Loaded => {
            if let Some(tree) = &model.document.tree {
                out.push_str(&editor_header(model));
                out.push('\n');
                render_tree(tree, &mut out);
            }
        }
    }

    let status = model.ui.status_text();
    if !status.is_empty() {
        let _ = writeln!(out, "-- {}", status);
    }
    out
}

/// Title line of the editor card
pub fn editor_header(model: &AppModel) -> String {
    let name = model
        .document
        .source_name
        .as_deref()
        .unwrap_or("untitled");
    format!("--- {} ---", name)
}

/// Render a tree as indented `key: value` rows
pub fn render_tree(tree: &Node, out: &mut String) {
    match tree {
        Node::Mapping(m) if m.is_empty() => out.push_str("{}\n"),
        Node::Sequence(items) if items.is_empty() => out.push_str("[]\n"),
        Node::Scalar(scalar) => {
            let _ = writeln!(out, "{}", scalar);
        }
        _ => render_children(tree, &NodePath::root(), 0, out),
    }
}

fn render_children(node: &Node, path: &NodePath, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    match node {
        Node::Mapping(mapping) => {
            for (key, child) in mapping {
                render_row(&indent, &format!("{}:", key), child, &path.child(key.as_str()), depth, out);
            }
        }
        Node::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                render_row(&indent, "-", child, &path.child(index.to_string()), depth, out);
            }
        }
        Node::Scalar(_) => {}
    }
}

fn render_row(
    indent: &str,
    label: &str,
    child: &Node,
    child_path: &NodePath,
    depth: usize,
    out: &mut String,
) {
    let address = prompt_path(child_path);
    match child {
        Node::Scalar(scalar) => {
            let _ = writeln!(out, "{}{} {}    [{}]", indent, label, scalar, address);
        }
        Node::Mapping(m) if m.is_empty() => {
            let _ = writeln!(out, "{}{} {{}}    [{}]", indent, label, address);
        }
        Node::Sequence(items) if items.is_empty() => {
            let _ = writeln!(out, "{}{} []    [{}]", indent, label, address);
        }
        _ => {
            let _ = writeln!(out, "{}{}    [{}]", indent, label, address);
            render_children(child, child_path, depth + 1, out);
        }
    }
}

/// A path as it has to be typed at the prompt
pub fn prompt_path(path: &NodePath) -> String {
    shell_words::quote(&path.to_string()).into_owned()
}

//! Tree editing tests
//!
//! Add, remove, rename and set-value edits applied through `update`.

mod common;

use common::{node_at, test_model, top_keys};

use yaml_editor::codec;
use yaml_editor::commands::Cmd;
use yaml_editor::error::EditorError;
use yaml_editor::messages::{Msg, TreeMsg};
use yaml_editor::model::{AppModel, Node, NodePath, Scalar, ValueKind};
use yaml_editor::update::update;

fn set(path: &str, key: &str, input: &str) -> Msg {
    Msg::Tree(TreeMsg::SetValue {
        path: NodePath::parse(path),
        key: key.to_string(),
        input: input.to_string(),
    })
}

// ========================================================================
// Add
// ========================================================================

#[test]
fn test_add_string_key_twice() {
    let mut model = test_model("a: 1", None);
    update(&mut model, Msg::add_key(NodePath::root(), ValueKind::String));
    update(&mut model, Msg::add_key(NodePath::root(), ValueKind::String));

    assert_eq!(top_keys(&model), vec!["a", "new_key", "new_key_1"]);
    assert_eq!(
        node_at(&model, "new_key_1"),
        Some(&Node::Scalar(Scalar::String("new_value".into())))
    );
}

#[test]
fn test_add_each_kind_default() {
    let mut model = test_model("{}", None);
    for kind in ValueKind::ALL {
        update(&mut model, Msg::add_key(NodePath::root(), kind));
    }
    let text = codec::serialize(model.document.tree.as_ref().unwrap()).unwrap();
    assert_eq!(
        text,
        "new_key: new_value\nnew_key_1: 0\nnew_key_2: false\nnew_key_3: {}\n"
    );
}

#[test]
fn test_add_into_nested_object() {
    let mut model = test_model("server:\n  host: localhost\n", None);
    update(
        &mut model,
        Msg::add_key(NodePath::parse("server"), ValueKind::Number),
    );
    assert_eq!(
        node_at(&model, "server.new_key"),
        Some(&Node::Scalar(Scalar::Int(0)))
    );
}

#[test]
fn test_add_without_document_is_ignored() {
    let mut model = AppModel::default();
    let cmd = update(&mut model, Msg::add_key(NodePath::root(), ValueKind::String));
    assert_eq!(cmd, None);
    assert!(model.document.tree.is_none());
}

#[test]
fn test_add_into_scalar_is_not_a_mapping() {
    let mut model = test_model("name: demo", None);
    update(
        &mut model,
        Msg::add_key(NodePath::parse("name"), ValueKind::String),
    );
    assert_eq!(
        model.document.error,
        Some(EditorError::NotAMapping {
            path: "name".into()
        })
    );
    assert!(model.ui.has_error_modal());
    assert_eq!(top_keys(&model), vec!["name"]);
}

#[test]
fn test_edit_under_key_containing_dots() {
    let mut model = test_model("app.kubernetes.io:\n  name: x\n", None);
    let path = NodePath::parse(r"app\.kubernetes\.io");

    update(&mut model, Msg::add_key(path.clone(), ValueKind::String));
    update(&mut model, Msg::rename_key(path.clone(), "name", "component"));
    update(&mut model, set(r"app\.kubernetes\.io", "component", "web"));

    assert!(model.document.error.is_none());
    let labels = model.document.tree.as_ref().unwrap().get(&path).unwrap();
    assert_eq!(
        codec::serialize(labels).unwrap(),
        "new_key: new_value\ncomponent: web\n"
    );
}

// ========================================================================
// Remove
// ========================================================================

#[test]
fn test_remove_key() {
    let mut model = test_model("a: 1\nb: 2\nc: 3\n", None);
    update(&mut model, Msg::remove_key(NodePath::root(), "b"));
    assert_eq!(top_keys(&model), vec!["a", "c"]);
}

#[test]
fn test_remove_missing_key_is_noop() {
    let mut model = test_model("a: 1", None);
    let cmd = update(&mut model, Msg::remove_key(NodePath::root(), "zzz"));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(top_keys(&model), vec!["a"]);
    assert!(!model.ui.has_error_modal());
}

// ========================================================================
// Rename
// ========================================================================

#[test]
fn test_rename_moves_key_to_end() {
    let mut model = test_model("a: 1\nb: 2\n", None);
    update(&mut model, Msg::rename_key(NodePath::root(), "a", "z"));
    assert_eq!(top_keys(&model), vec!["b", "z"]);
    assert_eq!(node_at(&model, "z"), Some(&Node::Scalar(Scalar::Int(1))));
}

#[test]
fn test_rename_to_existing_key_fails() {
    let mut model = test_model("a: 1\nb: 2\n", None);
    update(&mut model, Msg::rename_key(NodePath::root(), "a", "b"));

    assert_eq!(top_keys(&model), vec!["a", "b"]);
    assert_eq!(node_at(&model, "b"), Some(&Node::Scalar(Scalar::Int(2))));
    assert_eq!(
        model.ui.error_modal.as_ref().unwrap().message,
        "Key \"b\" already exists."
    );
}

#[test]
fn test_rename_to_same_key_is_noop() {
    let mut model = test_model("a: 1\nb: 2\n", None);
    update(&mut model, Msg::rename_key(NodePath::root(), "a", "a"));
    assert_eq!(top_keys(&model), vec!["a", "b"]);
    assert!(!model.ui.has_error_modal());
}

// ========================================================================
// Set value
// ========================================================================

#[test]
fn test_set_value_keeps_kind() {
    let mut model = test_model("port: 80\ndebug: false\nname: demo\n", None);
    update(&mut model, set(".", "port", "8080"));
    update(&mut model, set(".", "debug", "true"));
    update(&mut model, set(".", "name", "8080"));

    assert_eq!(node_at(&model, "port"), Some(&Node::Scalar(Scalar::Int(8080))));
    assert_eq!(node_at(&model, "debug"), Some(&Node::Scalar(Scalar::Bool(true))));
    assert_eq!(
        node_at(&model, "name"),
        Some(&Node::Scalar(Scalar::String("8080".into())))
    );
}

#[test]
fn test_set_invalid_number_reports_error() {
    let mut model = test_model("port: 80", None);
    update(&mut model, set(".", "port", "eighty"));
    assert!(matches!(
        model.document.error,
        Some(EditorError::InvalidValue { .. })
    ));
    assert_eq!(node_at(&model, "port"), Some(&Node::Scalar(Scalar::Int(80))));
}

#[test]
fn test_set_sequence_element() {
    let mut model = test_model("hosts:\n- a\n- b\n", None);
    update(&mut model, set("hosts", "1", "c"));
    assert_eq!(
        node_at(&model, "hosts.1"),
        Some(&Node::Scalar(Scalar::String("c".into())))
    );
}

#[test]
fn test_set_sequence_bad_index() {
    let mut model = test_model("hosts:\n- a\n", None);
    update(&mut model, set("hosts", "first", "c"));
    assert!(model.ui.has_error_modal());
}

// ========================================================================
// Round trip after edits
// ========================================================================

#[test]
fn test_edits_survive_serialization() {
    let mut model = test_model("name: demo\nserver:\n  port: 80\n", Some("test.yaml"));
    update(&mut model, Msg::rename_key(NodePath::root(), "name", "title"));
    update(&mut model, set("server", "port", "8080"));
    update(
        &mut model,
        Msg::add_key(NodePath::parse("server"), ValueKind::Boolean),
    );

    let saved = model.document.save_to_text().unwrap();
    assert_eq!(saved.file_name, "test_edited.yaml");
    assert_eq!(
        saved.content,
        "server:\n  port: 8080\n  new_key: false\ntitle: demo\n"
    );
}

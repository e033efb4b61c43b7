//! Tree editing handlers (add, remove, rename, set value)

use super::report_error;
use crate::commands::Cmd;
use crate::error::EditorError;
use crate::messages::TreeMsg;
use crate::model::{self, AppModel, Node, NodePath};

/// Handle tree messages
///
/// Edits only apply to a loaded tree; with nothing loaded they are ignored.
pub fn update_tree(model: &mut AppModel, msg: TreeMsg) -> Option<Cmd> {
    let Some(tree) = model.document.tree.as_mut() else {
        tracing::debug!(?msg, "tree edit ignored: no document loaded");
        return None;
    };

    match apply(tree, msg) {
        Ok(status) => {
            model.ui.set_status(status);
            Some(Cmd::Redraw)
        }
        Err(e) => {
            report_error(model, e);
            Some(Cmd::Redraw)
        }
    }
}

/// Apply one edit, returning the status line text on success
fn apply(tree: &mut Node, msg: TreeMsg) -> Result<String, EditorError> {
    match msg {
        TreeMsg::AddKey { path, kind } => {
            let mapping = tree.mapping_at_mut(&path)?;
            let key = model::add_key(mapping, kind);
            Ok(format!("Added {} \"{}\"", kind, key))
        }

        TreeMsg::RemoveKey { path, key } => {
            let mapping = tree.mapping_at_mut(&path)?;
            match model::remove_key(mapping, &key) {
                Some(_) => Ok(format!("Removed \"{}\"", key)),
                None => Ok(String::new()),
            }
        }

        TreeMsg::RenameKey {
            path,
            old_key,
            new_key,
        } => {
            let mapping = tree.mapping_at_mut(&path)?;
            model::rename_key(mapping, &old_key, &new_key)?;
            if old_key == new_key {
                Ok(String::new())
            } else {
                Ok(format!("Renamed \"{}\" to \"{}\"", old_key, new_key))
            }
        }

        TreeMsg::SetValue { path, key, input } => {
            set_value_at(tree, &path, &key, &input)?;
            Ok(format!("Updated \"{}\"", path.child(key.as_str())))
        }
    }
}

fn set_value_at(tree: &mut Node, path: &NodePath, key: &str, input: &str) -> Result<(), EditorError> {
    let not_a_container = || EditorError::NotAMapping {
        path: path.to_string(),
    };
    match tree.get_mut(path).ok_or_else(not_a_container)? {
        Node::Mapping(mapping) => model::set_value(mapping, key, input),
        Node::Sequence(items) => {
            let index = key.parse::<usize>().map_err(|_| EditorError::InvalidValue {
                key: key.to_string(),
                input: input.to_string(),
            })?;
            model::set_element(items, index, input)
        }
        Node::Scalar(_) => Err(not_a_container()),
    }
}

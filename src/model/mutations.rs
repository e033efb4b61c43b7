//! Key/value mutations over a single mapping
//!
//! These are the editing primitives behind the add-row, remove-row and
//! key-rename actions. They mutate the caller's mapping in place.

use std::fmt;
use std::str::FromStr;

use super::node::{Mapping, Node, Scalar};
use crate::error::EditorError;

/// Base name for generated keys
pub const NEW_KEY_BASE: &str = "new_key";

/// Kind of value created by [`add_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
}

impl ValueKind {
    pub const ALL: [ValueKind; 4] = [
        ValueKind::String,
        ValueKind::Number,
        ValueKind::Boolean,
        ValueKind::Object,
    ];

    /// Default value inserted for this kind
    pub fn default_value(self) -> Node {
        match self {
            ValueKind::String => Node::string("new_value"),
            ValueKind::Number => Node::Scalar(Scalar::Int(0)),
            ValueKind::Boolean => Node::Scalar(Scalar::Bool(false)),
            ValueKind::Object => Node::empty_mapping(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::InvalidValueKind {
                kind: s.to_string(),
            })
    }
}

/// First key of `new_key`, `new_key_1`, `new_key_2`, ... not present in `mapping`
pub fn fresh_key(mapping: &Mapping) -> String {
    let mut key = NEW_KEY_BASE.to_string();
    let mut counter: u64 = 1;
    while mapping.contains_key(key.as_str()) {
        key = format!("{}_{}", NEW_KEY_BASE, counter);
        counter += 1;
    }
    key
}

/// Append a fresh key with the default value for `kind`; returns the key
pub fn add_key(mapping: &mut Mapping, kind: ValueKind) -> String {
    let key = fresh_key(mapping);
    mapping.insert(key.clone(), kind.default_value());
    key
}

/// Remove `key` if present; an absent key is a no-op
pub fn remove_key(mapping: &mut Mapping, key: &str) -> Option<Node> {
    mapping.shift_remove(key)
}

/// Move the value at `old_key` under `new_key`
///
/// The renamed entry goes to the end of iteration order. Fails with
/// [`EditorError::DuplicateKey`] (mapping untouched) if `new_key` is taken.
/// Renaming to the same key, or renaming a key that is not present, does
/// nothing.
pub fn rename_key(mapping: &mut Mapping, old_key: &str, new_key: &str) -> Result<(), EditorError> {
    if new_key == old_key {
        return Ok(());
    }
    if mapping.contains_key(new_key) {
        return Err(EditorError::DuplicateKey {
            key: new_key.to_string(),
        });
    }
    if let Some(value) = mapping.shift_remove(old_key) {
        mapping.insert(new_key.to_string(), value);
    }
    Ok(())
}

/// Replace the scalar value at an existing key
///
/// The input is coerced to the kind of the current value. Containers are
/// replaced outright by a string scalar, as typing into an object row would.
pub fn set_value(mapping: &mut Mapping, key: &str, input: &str) -> Result<(), EditorError> {
    replace_scalar(mapping.get_mut(key), key, input)
}

/// Replace the scalar value at index `index` of a sequence
pub fn set_element(items: &mut [Node], index: usize, input: &str) -> Result<(), EditorError> {
    replace_scalar(items.get_mut(index), &index.to_string(), input)
}

fn replace_scalar(slot: Option<&mut Node>, key: &str, input: &str) -> Result<(), EditorError> {
    let invalid = || EditorError::InvalidValue {
        key: key.to_string(),
        input: input.to_string(),
    };
    let slot = slot.ok_or_else(invalid)?;
    let value = match slot {
        Node::Scalar(current) => current.parse_like(input).ok_or_else(invalid)?,
        Node::Mapping(_) | Node::Sequence(_) => Scalar::String(input.to_string()),
    };
    *slot = Node::Scalar(value);
    Ok(())
}

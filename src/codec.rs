//! YAML codec - converts between YAML text and the document tree
//!
//! Parsing and emitting are delegated to `serde_yaml`; this module only maps
//! its value model onto [`Node`]. Tags are dropped in favour of the tagged
//! value, and non-string mapping keys are stringified. Keys that become equal
//! once stringified are rejected.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_yaml::Value;

use crate::error::EditorError;
use crate::model::{Mapping, Node, Scalar};

/// Parse YAML text into a tree
pub fn parse(text: &str) -> Result<Node, EditorError> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| EditorError::Parse {
        detail: e.to_string(),
    })?;
    node_from_value(value)
}

/// Serialize a tree back to YAML text
pub fn serialize(node: &Node) -> Result<String, EditorError> {
    serde_yaml::to_string(node).map_err(|e| EditorError::Encoding {
        detail: e.to_string(),
    })
}

/// Convert a parsed value, rejecting mappings whose keys collide once
/// stringified (`1` and `'1'`)
fn node_from_value(value: Value) -> Result<Node, EditorError> {
    let node = match value {
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Node::Scalar(number_to_scalar(&n)),
        Value::String(s) => Node::Scalar(Scalar::String(s)),
        Value::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(node_from_value)
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                let key = key_to_string(key);
                if mapping.contains_key(key.as_str()) {
                    return Err(EditorError::Parse {
                        detail: format!("duplicated mapping key {:?} after stringification", key),
                    });
                }
                mapping.insert(key, node_from_value(value)?);
            }
            Node::Mapping(mapping)
        }
        Value::Tagged(tagged) => node_from_value(tagged.value)?,
    };
    Ok(node)
}

fn number_to_scalar(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else {
        // u64 beyond i64::MAX, or a float
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn key_to_string(key: Value) -> String {
    match key {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(scalar) => scalar.serialize(serializer),
            Node::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (key, value) in mapping {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Sequence(items) => serializer.collect_seq(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_mapping() {
        let tree = parse("key: value").unwrap();
        let mut expected = Mapping::new();
        expected.insert("key".into(), Node::string("value"));
        assert_eq!(tree, Node::Mapping(expected));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("key: value: another_value").unwrap_err();
        assert!(matches!(err, EditorError::Parse { .. }));
        assert!(err.user_message().contains("Error parsing YAML"));
    }

    #[test]
    fn test_parse_scalars() {
        let tree = parse("s: text\ni: 42\nf: 1.5\nb: true\nn: null\n").unwrap();
        let m = tree.as_mapping().unwrap();
        assert_eq!(m["s"], Node::string("text"));
        assert_eq!(m["i"], Node::Scalar(Scalar::Int(42)));
        assert_eq!(m["f"], Node::Scalar(Scalar::Float(1.5)));
        assert_eq!(m["b"], Node::Scalar(Scalar::Bool(true)));
        assert_eq!(m["n"], Node::Scalar(Scalar::Null));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let tree = parse("zebra: 1\napple: 2\nmango: 3\n").unwrap();
        let keys: Vec<&str> = tree
            .as_mapping()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let tree = parse("1: one\ntrue: yes\n").unwrap();
        let m = tree.as_mapping().unwrap();
        assert!(m.contains_key("1"));
        assert!(m.contains_key("true"));
    }

    #[test]
    fn test_keys_colliding_after_stringification_are_rejected() {
        let err = parse("1: int_key\n'1': string_key\n").unwrap_err();
        assert!(matches!(err, EditorError::Parse { ref detail } if detail.contains("\"1\"")));

        let nested = parse("outer:\n- true: a\n  'true': b\n");
        assert!(matches!(nested, Err(EditorError::Parse { .. })));
    }

    #[test]
    fn test_tags_are_dropped() {
        let tree = parse("value: !custom 5\n").unwrap();
        assert_eq!(
            tree.as_mapping().unwrap()["value"],
            Node::Scalar(Scalar::Int(5))
        );
    }

    #[test]
    fn test_empty_text_is_null() {
        assert!(parse("").unwrap().is_null());
    }

    #[test]
    fn test_serialize_mapping() {
        let tree = parse("key: value").unwrap();
        assert_eq!(serialize(&tree).unwrap(), "key: value\n");
    }

    #[test]
    fn test_roundtrip_nested_document() {
        let text = "\
name: demo
version: 3
ratio: 0.25
enabled: false
empty: null
quoted: 'true'
tags:
- a
- b
server:
  host: localhost
  ports:
  - 80
  - 443
  nested:
    deep: {}
";
        let tree = parse(text).unwrap();
        let emitted = serialize(&tree).unwrap();
        assert_eq!(parse(&emitted).unwrap(), tree);
    }

    #[test]
    fn test_string_that_looks_like_bool_stays_string() {
        let mut m = Mapping::new();
        m.insert("flag".into(), Node::string("true"));
        let emitted = serialize(&Node::Mapping(m.clone())).unwrap();
        assert_eq!(parse(&emitted).unwrap(), Node::Mapping(m));
    }
}

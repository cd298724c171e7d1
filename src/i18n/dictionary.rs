//! Dictionary parsing and nested access
//!
//! A dictionary is parsed from a JSON document whose root is an object.
//! Objects become groups, strings become leaves, and objects whose keys are
//! drawn from `zero`/`one`/`other` (with `other` present and every value a
//! scalar) become plural nodes.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::i18n::key::Key;
use crate::i18n::language::LanguageCode;
use crate::i18n::plural::PluralNode;
use crate::utils::errors::{LoadError, LoadResult};

/// One node of a dictionary tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A final template string
    Text(String),
    /// A zero/one/other pluralization entry
    Plural(PluralNode),
    /// A mapping from key segment to sub-tree
    Group(HashMap<String, Node>),
}

impl Node {
    /// Step into a child by key segment
    ///
    /// Plural children are reachable by name; text leaves have no children.
    pub fn child(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Group(children) => children.get(segment),
            Node::Plural(plural) => plural.child(segment),
            Node::Text(_) => None,
        }
    }

    fn from_object(code: &LanguageCode, path: &mut Vec<String>, map: Map<String, Value>) -> Node {
        match PluralNode::from_object(&map) {
            Some(plural) => Node::Plural(plural),
            None => Node::Group(children_of(code, path, map)),
        }
    }

    fn from_value(code: &LanguageCode, path: &mut Vec<String>, value: Value) -> Option<Node> {
        match value {
            Value::String(text) => Some(Node::Text(text)),
            Value::Object(map) => Some(Node::from_object(code, path, map)),
            Value::Number(number) => Some(Node::Text(number.to_string())),
            Value::Bool(flag) => Some(Node::Text(flag.to_string())),
            Value::Null | Value::Array(_) => {
                warn!(
                    language = %code,
                    key = %path.join("."),
                    "Skipping translation entry that is neither text nor a mapping"
                );
                None
            }
        }
    }

    fn count_leaves(&self, stats: &mut (usize, usize)) {
        match self {
            Node::Text(_) => stats.0 += 1,
            Node::Plural(_) => {
                stats.0 += 1;
                stats.1 += 1;
            }
            Node::Group(children) => {
                for child in children.values() {
                    child.count_leaves(stats);
                }
            }
        }
    }
}

fn children_of(
    code: &LanguageCode,
    path: &mut Vec<String>,
    map: Map<String, Value>,
) -> HashMap<String, Node> {
    let mut children = HashMap::with_capacity(map.len());
    for (segment, value) in map {
        path.push(segment.clone());
        let node = Node::from_value(code, path, value);
        path.pop();
        if let Some(node) = node {
            children.insert(segment, node);
        }
    }
    children
}

/// Parsed translation tree for one language
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    root: HashMap<String, Node>,
}

impl Dictionary {
    /// Parse a raw JSON resource for `code`
    pub fn parse(code: &LanguageCode, bytes: &[u8]) -> LoadResult<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
            code: code.clone(),
            source,
        })?;

        let Value::Object(map) = value else {
            return Err(LoadError::NotAMapping { code: code.clone() });
        };

        // The root is always a group, even if it happens to look plural.
        let root = children_of(code, &mut Vec::new(), map);

        Ok(Self { root })
    }

    /// Walk the tree along `key`
    ///
    /// Returns `None` when a segment is absent or a leaf is hit before the
    /// path ends.
    pub fn get(&self, key: &Key) -> Option<&Node> {
        let segments = key.segments();
        let (first, rest) = segments.split_first()?;
        let mut node = self.root.get(*first)?;
        for segment in rest {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Count final values (text leaves and plural entries) and plural entries
    pub fn key_counts(&self) -> (usize, usize) {
        let mut stats = (0, 0);
        for node in self.root.values() {
            node.count_leaves(&mut stats);
        }
        stats
    }
}

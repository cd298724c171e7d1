//! Plural form selection
//!
//! Only the English-like zero/one/other pattern is modelled. Languages with
//! additional grammatical categories (few, many, two) are not supported:
//! their dictionaries can still provide `zero`, `one` and `other`, and any
//! count that is neither 0 nor 1 selects `other`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::i18n::dictionary::Node;

/// Selectable children of a plural node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Other,
}

impl PluralCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Other => "other",
        }
    }
}

/// A dictionary entry with `other` and optional `zero`/`one` templates
#[derive(Debug, Clone, PartialEq)]
pub struct PluralNode {
    forms: BTreeMap<PluralCategory, Node>,
}

impl PluralNode {
    /// Build from explicit templates
    pub fn new(zero: Option<String>, one: Option<String>, other: impl Into<String>) -> Self {
        let mut forms = BTreeMap::new();
        forms.insert(PluralCategory::Other, Node::Text(other.into()));
        if let Some(zero) = zero {
            forms.insert(PluralCategory::Zero, Node::Text(zero));
        }
        if let Some(one) = one {
            forms.insert(PluralCategory::One, Node::Text(one));
        }
        Self { forms }
    }

    /// Classify a JSON object as a plural node
    ///
    /// Matches when every key is `zero`, `one` or `other`, `other` is
    /// present, and every value is a scalar. Numbers and booleans are kept
    /// as their textual rendering, as elsewhere in a dictionary.
    pub fn from_object(map: &Map<String, Value>) -> Option<Self> {
        let mut forms = BTreeMap::new();
        for (name, value) in map {
            let category = PluralCategory::from_name(name)?;
            let text = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            forms.insert(category, Node::Text(text));
        }

        forms.contains_key(&PluralCategory::Other).then_some(Self { forms })
    }

    /// Child by category name, for nested access such as `items.one`
    pub fn child(&self, segment: &str) -> Option<&Node> {
        PluralCategory::from_name(segment).and_then(|category| self.forms.get(&category))
    }

    /// Category chosen for `count`
    ///
    /// `zero` when the count is 0 and a zero form exists, `one` when the
    /// count is 1 and a one form exists, `other` otherwise.
    pub fn category_for(&self, count: f64) -> PluralCategory {
        if count == 0.0 && self.forms.contains_key(&PluralCategory::Zero) {
            PluralCategory::Zero
        } else if count == 1.0 && self.forms.contains_key(&PluralCategory::One) {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    /// Template selected for `count`
    pub fn select(&self, count: f64) -> &str {
        let category = self.category_for(count);
        match self.forms.get(&category).or_else(|| self.forms.get(&PluralCategory::Other)) {
            Some(Node::Text(text)) => text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> PluralNode {
        PluralNode::new(
            Some("none".into()),
            Some("%{count} item".into()),
            "%{count} items",
        )
    }

    #[test]
    fn test_select_zero_one_other() {
        let node = full();
        assert_eq!(node.select(0.0), "none");
        assert_eq!(node.select(1.0), "%{count} item");
        assert_eq!(node.select(7.0), "%{count} items");
        assert_eq!(node.select(-1.0), "%{count} items");
        assert_eq!(node.select(1.5), "%{count} items");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(full().select(-0.0), "none");
    }

    #[test]
    fn test_missing_zero_falls_through_to_other() {
        let node = PluralNode::new(None, Some("one".into()), "other");
        assert_eq!(node.category_for(0.0), PluralCategory::Other);
        assert_eq!(node.select(0.0), "other");
    }

    #[test]
    fn test_missing_one_falls_through_to_other() {
        let node = PluralNode::new(Some("zero".into()), None, "other");
        assert_eq!(node.select(1.0), "other");
    }

    #[test]
    fn test_classification_rules() {
        let ok: Map<String, Value> = serde_json::from_str(r#"{"zero": "a", "other": "b"}"#).unwrap();
        assert!(PluralNode::from_object(&ok).is_some());

        let no_other: Map<String, Value> = serde_json::from_str(r#"{"one": "a"}"#).unwrap();
        assert!(PluralNode::from_object(&no_other).is_none());

        let foreign_key: Map<String, Value> =
            serde_json::from_str(r#"{"one": "a", "other": "b", "few": "c"}"#).unwrap();
        assert!(PluralNode::from_object(&foreign_key).is_none());

        let nested: Map<String, Value> =
            serde_json::from_str(r#"{"one": {"x": "a"}, "other": "b"}"#).unwrap();
        assert!(PluralNode::from_object(&nested).is_none());

        let numeric: Map<String, Value> = serde_json::from_str(r#"{"one": 1, "other": "n"}"#).unwrap();
        let node = PluralNode::from_object(&numeric).unwrap();
        assert_eq!(node.select(1.0), "1");

        let null_form: Map<String, Value> = serde_json::from_str(r#"{"one": null, "other": "n"}"#).unwrap();
        assert!(PluralNode::from_object(&null_form).is_none());

        let empty = Map::new();
        assert!(PluralNode::from_object(&empty).is_none());
    }

    #[test]
    fn test_child_by_name() {
        let node = full();
        assert_eq!(node.child("one"), Some(&Node::Text("%{count} item".into())));
        assert_eq!(node.child("few"), None);
    }
}

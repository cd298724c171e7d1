//! Translation keys
//!
//! A key is either a single symbolic identifier or a dot-delimited path.
//! Both are normalized into a list of segments once, before traversal.

use std::fmt;

/// A path into a dictionary tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// One segment, never split (may contain dots)
    Atomic(String),
    /// Segments of a nested key such as `menu.file.open`
    Path(Vec<String>),
}

impl Key {
    /// Create a symbolic key
    pub fn atomic(id: impl Into<String>) -> Self {
        Key::Atomic(id.into())
    }

    /// Create a nested key by splitting on `.`
    pub fn path(dotted: &str) -> Self {
        Key::Path(dotted.split('.').map(str::to_string).collect())
    }

    /// Segments to walk, in order
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Key::Atomic(id) => vec![id.as_str()],
            Key::Path(segments) => segments.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Atomic(id) => f.write_str(id),
            Key::Path(segments) => f.write_str(&segments.join(".")),
        }
    }
}

impl From<&str> for Key {
    fn from(dotted: &str) -> Self {
        Key::path(dotted)
    }
}

impl From<String> for Key {
    fn from(dotted: String) -> Self {
        Key::path(&dotted)
    }
}

impl From<&String> for Key {
    fn from(dotted: &String) -> Self {
        Key::path(dotted)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_keys_split_on_dots() {
        let key = Key::from("a.b.c");
        assert_eq!(key.segments(), vec!["a", "b", "c"]);
        assert_eq!(key.to_string(), "a.b.c");
    }

    #[test]
    fn test_atomic_keys_are_not_split() {
        let key = Key::atomic("file.name");
        assert_eq!(key.segments(), vec!["file.name"]);
        assert_eq!(key.to_string(), "file.name");
    }

    #[test]
    fn test_single_segment_path_matches_atomic() {
        assert_eq!(Key::from("nope").segments(), Key::atomic("nope").segments());
    }

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(Key::from("a..b").segments(), vec!["a", "", "b"]);
    }
}

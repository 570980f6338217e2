//! Paths naming nodes within a settings tree.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use cfgtree_node::{compare_names, name_hash, names_equal};
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// An ordered sequence of object keys locating a node.
///
/// Segments compare ignoring case, the same way object keys do. Array
/// elements never contribute a segment: a path names the array, not the
/// element.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsPath(Vec<String>);

impl SettingsPath {
    /// The empty path, naming the comparison root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_segments(self) -> Vec<String> {
        self.0
    }

    /// Segment-wise case-insensitive match against raw segments.
    pub fn matches<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.0.len() == segments.len()
            && self
                .0
                .iter()
                .zip(segments)
                .all(|(a, b)| names_equal(Some(a.as_str()), Some(b.as_ref())))
    }

    /// Returns `true` if `self` is `other` or one of its ancestors.
    pub fn is_prefix_of(&self, other: &SettingsPath) -> bool {
        self.len() <= other.len() && self.matches(&other.0[..self.len()])
    }
}

impl PartialEq for SettingsPath {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for SettingsPath {}

impl PartialOrd for SettingsPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SettingsPath {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match compare_names(a, b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl Hash for SettingsPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0.len());
        for segment in &self.0 {
            state.write_u64(name_hash(Some(segment.as_str())));
        }
    }
}

impl fmt::Display for SettingsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for SettingsPath {
    type Err = DiffError;

    /// Parse dotted notation. The empty string is the root path.
    fn from_str(s: &str) -> DiffResult<Self> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(DiffError::InvalidPath {
                path: s.to_string(),
                reason: "empty segment".to_string(),
            });
        }
        Ok(Self(segments))
    }
}

impl From<Vec<String>> for SettingsPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for SettingsPath {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for SettingsPath {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

impl From<SettingsPath> for Vec<String> {
    fn from(path: SettingsPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn segments_compare_ignoring_case() {
        let a = SettingsPath::from(["Root", "Obj"]);
        let b = SettingsPath::from(["root", "OBJ"]);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        let parent = SettingsPath::from(["root", "array"]);
        let child = SettingsPath::from(["root", "array", "x"]);
        assert!(parent < child);
        assert!(parent.is_prefix_of(&child));
        assert!(!child.is_prefix_of(&parent));
        assert!(SettingsPath::root().is_prefix_of(&parent));
    }

    #[test]
    fn displays_dotted() {
        assert_eq!(SettingsPath::from(["root", "obj", "prop2"]).to_string(), "root.obj.prop2");
        assert_eq!(SettingsPath::root().to_string(), "");
    }

    #[test]
    fn parses_dotted() {
        let path: SettingsPath = "root.obj.prop2".parse().unwrap();
        assert_eq!(path.segments(), ["root", "obj", "prop2"]);
        assert!("".parse::<SettingsPath>().unwrap().is_empty());
    }

    #[test]
    fn rejects_empty_segments() {
        for input in ["root..x", ".root", "root."] {
            let err = input.parse::<SettingsPath>().unwrap_err();
            assert!(matches!(err, DiffError::InvalidPath { .. }), "{input}");
        }
    }

    #[test]
    fn serializes_as_segment_list() {
        let path = SettingsPath::from(["a", "b"]);
        assert_eq!(serde_json::to_string(&path).unwrap(), r#"["a","b"]"#);
        let back: SettingsPath = serde_json::from_str(r#"["A","B"]"#).unwrap();
        assert_eq!(back, path);
    }
}

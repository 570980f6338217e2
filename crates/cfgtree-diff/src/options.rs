use serde::{Deserialize, Serialize};

use crate::path::SettingsPath;

/// Options for structural comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Subtrees to ignore. Excluding a path also excludes everything below it.
    pub excluded_paths: Vec<SettingsPath>,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excluded_path(mut self, path: impl Into<SettingsPath>) -> Self {
        self.excluded_paths.push(path.into());
        self
    }

    /// Returns `true` if the path is listed exactly (ignoring case).
    pub fn is_excluded<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.excluded_paths.iter().any(|path| path.matches(segments))
    }
}

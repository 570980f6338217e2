//! Structural equality with path exclusions.

use cfgtree_node::Node;
use tracing::debug;

use crate::options::CompareOptions;
use crate::walk::{self, Differences};

/// Compares settings trees under a fixed set of [`CompareOptions`].
#[derive(Clone, Debug, Default)]
pub struct SettingsComparer {
    options: CompareOptions,
}

impl SettingsComparer {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Returns `true` if the trees match outside excluded paths.
    ///
    /// Stricter than an empty [`find_differences`](Self::find_differences):
    /// nodes of different kinds, or with different names, are unequal even
    /// when their values agree.
    pub fn equals(&self, left: Option<&Node>, right: Option<&Node>) -> bool {
        let mismatch = walk::first_mismatch(left, right, &self.options);
        debug!(
            equal = mismatch.is_none(),
            first_mismatch = ?mismatch.as_ref().map(ToString::to_string),
            "compared settings trees"
        );
        mismatch.is_none()
    }

    /// All differences outside excluded paths.
    pub fn find_differences(&self, left: Option<&Node>, right: Option<&Node>) -> Differences {
        walk::find_differences_with(left, right, &self.options)
    }
}

/// One-off form of [`SettingsComparer::equals`].
pub fn equals(left: Option<&Node>, right: Option<&Node>, options: &CompareOptions) -> bool {
    SettingsComparer::new(options.clone()).equals(left, right)
}

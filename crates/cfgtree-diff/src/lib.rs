//! Diff engine for settings trees.
//!
//! Walks two trees side by side and reports the paths at which they
//! disagree. The same walk backs a structural equality check that can
//! ignore chosen subtrees.
//!
//! # Key Types
//!
//! - [`SettingsPath`] -- Case-insensitive sequence of object keys naming a node
//! - [`Differences`] / [`find_differences`] -- Set of paths where two trees differ
//! - [`CompareOptions`] -- Paths to exclude from comparison
//! - [`SettingsComparer`] / [`equals`] -- Equality with exclusions

pub mod comparer;
pub mod error;
pub mod options;
pub mod path;
pub mod walk;

pub use comparer::{equals, SettingsComparer};
pub use error::{DiffError, DiffResult};
pub use options::CompareOptions;
pub use path::SettingsPath;
pub use walk::{find_differences, find_differences_with, Differences};

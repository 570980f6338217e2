//! Merge engine for settings trees.
//!
//! Combines two trees into a new one under per-kind strategies. Merging is
//! right-biased: on conflict the right-hand tree wins unless a strategy says
//! otherwise. Inputs are never mutated and the engine never fails; every pair
//! of node kinds has a defined result.
//!
//! # Key Types
//!
//! - [`merge`] / [`merge_optional`] / [`merge_all`] -- Entry points
//! - [`MergeOptions`] -- Object and array strategies plus an optional hook
//! - [`ObjectMergeStyle`] / [`ArrayMergeStyle`] -- Per-kind strategies
//! - [`CustomMerge`] -- Hook that can take over merging of arbitrary pairs

pub mod hook;
pub mod merge;
pub mod options;

pub use hook::CustomMerge;
pub use merge::{merge, merge_all, merge_optional, MergeExt};
pub use options::{ArrayMergeStyle, MergeOptions, ObjectMergeStyle};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hook::CustomMerge;

/// How two object nodes are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectMergeStyle {
    /// Merge per key only when both objects have the same key set; otherwise
    /// the right object replaces the left one.
    Shallow,
    /// Union the key sets and merge shared keys recursively.
    #[default]
    Deep,
}

/// How two array nodes are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayMergeStyle {
    /// The right array replaces the left one.
    Replace,
    /// Left elements followed by right elements, duplicates kept.
    #[default]
    Concat,
    /// Left elements followed by right elements, duplicates dropped.
    Union,
    /// Elements at the same index are merged; the longer tail is appended.
    PerElement,
}

/// Options controlling a merge.
///
/// The strategies are plain data and (de)serialize with serde; the custom
/// hook is code and is skipped.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    pub object_style: ObjectMergeStyle,
    pub array_style: ArrayMergeStyle,
    #[serde(skip)]
    pub custom_merge: Option<Arc<dyn CustomMerge>>,
}

impl MergeOptions {
    pub fn new(object_style: ObjectMergeStyle, array_style: ArrayMergeStyle) -> Self {
        Self {
            object_style,
            array_style,
            custom_merge: None,
        }
    }

    /// Deep object merge with the default array style.
    pub fn deep() -> Self {
        Self::default().with_object_style(ObjectMergeStyle::Deep)
    }

    /// Shallow object merge with the default array style.
    pub fn shallow() -> Self {
        Self::default().with_object_style(ObjectMergeStyle::Shallow)
    }

    pub fn with_object_style(mut self, style: ObjectMergeStyle) -> Self {
        self.object_style = style;
        self
    }

    pub fn with_array_style(mut self, style: ArrayMergeStyle) -> Self {
        self.array_style = style;
        self
    }

    /// Install a hook consulted before the built-in rules at every level.
    pub fn with_custom_merge(mut self, hook: impl CustomMerge + 'static) -> Self {
        self.custom_merge = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for MergeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeOptions")
            .field("object_style", &self.object_style)
            .field("array_style", &self.array_style)
            .field("custom_merge", &self.custom_merge.is_some())
            .finish()
    }
}

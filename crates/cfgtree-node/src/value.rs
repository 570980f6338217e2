use std::hash::{Hash, Hasher};

use crate::name::{name_hash, names_equal, value_hash};

/// A leaf of the settings tree: an optional name and an optional string value.
#[derive(Clone, Debug, Default)]
pub struct ValueNode {
    name: Option<String>,
    value: Option<String>,
}

impl ValueNode {
    pub fn new(name: Option<String>, value: Option<String>) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// A copy of this leaf under a different name.
    pub fn renamed(&self, name: Option<String>) -> Self {
        Self {
            name,
            value: self.value.clone(),
        }
    }

    /// Hash code consistent with [`PartialEq`]: the name is folded, the value is not.
    pub fn hash_code(&self) -> u64 {
        value_hash(self.value())
            .wrapping_mul(397)
            .wrapping_add(name_hash(self.name()))
    }
}

impl PartialEq for ValueNode {
    fn eq(&self, other: &Self) -> bool {
        names_equal(self.name(), other.name()) && self.value == other.value
    }
}

impl Eq for ValueNode {}

impl Hash for ValueNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

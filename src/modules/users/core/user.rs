use serde::Serialize;
use serde_json::{Map, Value};

/// Caller supplied fields of a user, kept in insertion order.
pub type Attributes = Map<String, Value>;

/// Owned by the store. Never read from, or written by, a payload.
pub const RESERVED_ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl User {
    pub fn new(id: u64, mut attributes: Attributes) -> Self {
        attributes.shift_remove(RESERVED_ID_FIELD);
        Self { id, attributes }
    }

    /// Shallow merge: keys in `patch` overwrite, everything else is kept.
    /// Overwritten keys keep their position, new keys are appended.
    pub fn merge(&mut self, patch: Attributes) {
        for (key, value) in patch {
            if key == RESERVED_ID_FIELD {
                continue;
            }
            self.attributes.insert(key, value);
        }
    }
}

use serde::{Deserialize, Serialize};

/// Caller-supplied item fields for create and update. `id` is never accepted
/// here; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

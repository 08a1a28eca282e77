use serde::{Deserialize, Serialize};

/// Construction options for [`InMemoryAttachmentStore`](crate::InMemoryAttachmentStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of entries to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
        }
    }
}

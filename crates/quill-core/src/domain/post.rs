use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - the single resource managed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Create a new post with a freshly minted id.
    pub fn new(title: String, content: String) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    pub fn with_id(id: Uuid, title: String, content: String) -> Self {
        Self { id, title, content }
    }
}

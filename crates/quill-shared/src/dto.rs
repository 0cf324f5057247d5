//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Body of create and update requests.
///
/// An `id` must be a valid UUID if present, but its value is never used.
/// Missing or `null` strings decode as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A post as returned by `GET /api/v1/posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_a_well_formed_id() {
        let id = Uuid::new_v4();
        let payload: PostPayload =
            serde_json::from_str(&format!(r#"{{"id":"{id}","title":"A","content":"B"}}"#))
                .unwrap();
        assert_eq!(payload.id, Some(id));
        assert_eq!(payload.title, "A");
        assert_eq!(payload.content, "B");

        assert!(serde_json::from_str::<PostPayload>(r#"{"id":"not-a-uuid"}"#).is_err());
    }

    #[test]
    fn payload_null_strings_decode_as_empty() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"id":null,"title":null,"content":"B"}"#).unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.title, "");
        assert_eq!(payload.content, "B");
    }

    #[test]
    fn payload_fields_default_to_empty() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"only"}"#).unwrap();

        assert_eq!(payload.title, "only");
        assert_eq!(payload.content, "");
    }

    #[test]
    fn payload_rejects_wrong_types() {
        assert!(serde_json::from_str::<PostPayload>(r#"{"title":42}"#).is_err());
        assert!(serde_json::from_str::<PostPayload>("42").is_err());
    }
}

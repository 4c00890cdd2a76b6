use serde::{Deserialize, Serialize};

/// A candidate document submitted for reranking.
///
/// The `id` is caller-supplied and echoed back unchanged; uniqueness within a
/// request is not enforced. Documents are never mutated by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("doc-1", "cats are great");

        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.content, "cats are great");
    }

    #[test]
    fn test_document_deserializes_from_wire_shape() {
        let doc: Document =
            serde_json::from_str(r#"{"id": "a", "content": "some text"}"#).unwrap();

        assert_eq!(doc.id, "a");
        assert_eq!(doc.content, "some text");
    }

    #[test]
    fn test_document_missing_content_is_rejected() {
        let result = serde_json::from_str::<Document>(r#"{"id": "a"}"#);

        assert!(result.is_err());
    }
}

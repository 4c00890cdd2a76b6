use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::application::ScoringService;
use crate::domain::{Document, DomainError};

/// Deterministic stand-in for the cross-encoder: scores are derived from a
/// hash of the query and document content, so identical inputs always yield
/// identical scores. Used in tests and behind `--mock-scoring`.
pub struct MockScoring;

impl MockScoring {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockScoring {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoringService for MockScoring {
    async fn score(&self, query: &str, documents: &[Document]) -> Result<Vec<f32>, DomainError> {
        let query_hash = {
            let mut hasher = DefaultHasher::new();
            query.hash(&mut hasher);
            hasher.finish()
        };

        Ok(documents
            .iter()
            .map(|doc| {
                let mut hasher = DefaultHasher::new();
                query_hash.hash(&mut hasher);
                doc.content.hash(&mut hasher);
                (hasher.finish() % 10000) as f32 / 10000.0
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        "mock-scoring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_scoring_consistency() {
        let service = MockScoring::new();
        let documents = vec![Document::new("1", "fn test() {}")];

        let scores1 = service.score("test query", &documents).await.unwrap();
        let scores2 = service.score("test query", &documents).await.unwrap();

        assert_eq!(scores1, scores2);
    }

    #[tokio::test]
    async fn test_mock_scoring_one_score_per_document() {
        let service = MockScoring::new();
        let documents: Vec<Document> = (0..7)
            .map(|i| Document::new(format!("doc-{i}"), format!("content {i}")))
            .collect();

        let scores = service.score("query", &documents).await.unwrap();

        assert_eq!(scores.len(), 7);
        assert!(scores.iter().all(|s| (0.0..1.0).contains(s)));
    }

    #[tokio::test]
    async fn test_mock_scoring_depends_on_query() {
        let service = MockScoring::new();
        let documents = vec![Document::new("1", "cats are great")];

        let scores1 = service.score("cats", &documents).await.unwrap();
        let scores2 = service.score("dogs", &documents).await.unwrap();

        assert_ne!(scores1, scores2);
    }

    #[tokio::test]
    async fn test_mock_scoring_empty_documents() {
        let service = MockScoring::new();

        let scores = service.score("query", &[]).await.unwrap();

        assert!(scores.is_empty());
    }
}

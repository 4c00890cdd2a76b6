use async_trait::async_trait;

use crate::domain::{Document, DomainError};

/// Scores (query, document) pairs with a cross-encoder model.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Score each document against the query.
    /// Returns one relevance score per document, in input order.
    async fn score(&self, query: &str, documents: &[Document]) -> Result<Vec<f32>, DomainError>;

    /// Get the model name used for scoring
    fn model_name(&self) -> &str;
}

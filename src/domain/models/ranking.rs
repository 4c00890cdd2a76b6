use serde::{Deserialize, Serialize};

use super::Document;

fn default_top_k() -> i64 {
    5
}

/// A reranking request: a query plus the candidate documents to score.
///
/// `model` is informational only — it is echoed back in the response but never
/// selects a model at runtime, since exactly one model is loaded at startup.
/// `top_k` values of zero or below yield an empty result.
#[derive(Debug, Clone, Deserialize)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<Document>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_top_k")]
    pub top_k: i64,
}

impl RerankRequest {
    pub fn new(query: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            query: query.into(),
            documents,
            model: None,
            top_k: default_top_k(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = top_k;
        self
    }
}

/// A document paired with its relevance score and pre-sort input position.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    document: Document,
    score: f32,
    original_rank: usize,
}

impl ScoredDocument {
    pub fn new(document: Document, score: f32, original_rank: usize) -> Self {
        Self {
            document,
            score,
            original_rank,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn original_rank(&self) -> usize {
        self.original_rank
    }

    /// Consume the scored document into its output projection at the given
    /// position in the ranked list.
    pub fn into_ranked(self, new_rank: usize) -> RankedDocument {
        RankedDocument {
            id: self.document.id,
            content: self.document.content,
            score: self.score,
            original_rank: self.original_rank,
            new_rank,
        }
    }
}

/// Output-only projection of a scored document.
///
/// `original_rank` is the document's position in the request, captured before
/// sorting; `new_rank` is its position in the ranked output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedDocument {
    pub id: String,
    pub content: String,
    pub score: f32,
    pub original_rank: usize,
    pub new_rank: usize,
}

/// The reranked result list plus scoring metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankResponse {
    pub reranked_documents: Vec<RankedDocument>,
    pub model_used: String,
    pub processing_time: f64,
}

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ScoringService;
use crate::domain::{DomainError, RankedDocument, RerankRequest, RerankResponse, ScoredDocument};

pub struct RerankDocumentsUseCase {
    scoring_service: Arc<dyn ScoringService>,
}

impl RerankDocumentsUseCase {
    pub fn new(scoring_service: Arc<dyn ScoringService>) -> Self {
        Self { scoring_service }
    }

    pub async fn execute(&self, request: RerankRequest) -> Result<RerankResponse, DomainError> {
        let model_used = request
            .model
            .clone()
            .unwrap_or_else(|| self.scoring_service.model_name().to_string());

        let top_k = request.top_k.max(0) as usize;

        if request.documents.is_empty() || top_k == 0 {
            debug!(
                "Nothing to rank ({} documents, top_k={})",
                request.documents.len(),
                request.top_k
            );
            return Ok(RerankResponse {
                reranked_documents: vec![],
                model_used,
                processing_time: 0.0,
            });
        }

        info!(
            "Reranking {} documents for query: {}",
            request.documents.len(),
            request.query
        );

        let start_time = Instant::now();
        let scores = self
            .scoring_service
            .score(&request.query, &request.documents)
            .await?;
        let processing_time = start_time.elapsed().as_secs_f64();

        if scores.len() != request.documents.len() {
            return Err(DomainError::scoring(format!(
                "Model returned {} scores for {} documents",
                scores.len(),
                request.documents.len()
            )));
        }

        let mut scored: Vec<ScoredDocument> = request
            .documents
            .into_iter()
            .zip(scores)
            .enumerate()
            .map(|(rank, (document, score))| ScoredDocument::new(document, score, rank))
            .collect();

        // Stable sort: ties keep their original input order.
        scored.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);

        let reranked_documents: Vec<RankedDocument> = scored
            .into_iter()
            .enumerate()
            .map(|(new_rank, doc)| doc.into_ranked(new_rank))
            .collect();

        debug!(
            "Reranking complete, returning {} documents in {:.3}s",
            reranked_documents.len(),
            processing_time
        );

        Ok(RerankResponse {
            reranked_documents,
            model_used,
            processing_time,
        })
    }
}

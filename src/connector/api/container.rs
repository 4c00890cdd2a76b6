use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::application::{RerankDocumentsUseCase, ScoringService};
use crate::{MockScoring, OrtScoring};

use super::config::ServerConfig;

/// Wires the scoring service and configuration together.
///
/// The model is loaded exactly once here; a load failure is fatal to startup,
/// since the service has nothing useful to serve without it.
pub struct Container {
    scoring_service: Arc<dyn ScoringService>,
    config: ServerConfig,
}

impl Container {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let scoring_service: Arc<dyn ScoringService> = if config.mock_scoring {
            info!("Using mock scoring service");
            Arc::new(MockScoring::new())
        } else {
            info!("Initializing ONNX scoring service...");
            Arc::new(OrtScoring::new(
                Some(&config.model),
                config.model_cache_dir.as_deref(),
            )?)
        };

        Ok(Self {
            scoring_service,
            config,
        })
    }

    /// Build a container around an already-constructed scoring service.
    pub fn with_scoring_service(
        config: ServerConfig,
        scoring_service: Arc<dyn ScoringService>,
    ) -> Self {
        Self {
            scoring_service,
            config,
        }
    }

    pub fn rerank_use_case(&self) -> RerankDocumentsUseCase {
        RerankDocumentsUseCase::new(self.scoring_service.clone())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

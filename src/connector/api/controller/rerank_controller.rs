use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::domain::{DomainError, RerankRequest, RerankResponse};

use super::super::container::Container;
use super::super::error::ApiError;

/// `POST /v1/rerank` — validate the body into a [`RerankRequest`] and run the
/// rerank use case.
///
/// The body is decoded with typed serde, so malformed JSON and wrong-shaped
/// fields both fail the same way: a 400 carrying the decode message.
pub async fn rerank(
    State(container): State<Arc<Container>>,
    body: Bytes,
) -> Result<Json<RerankResponse>, ApiError> {
    let request: RerankRequest = serde_json::from_slice(&body)
        .map_err(|e| DomainError::invalid_input(format!("Invalid request data: {}", e)))?;

    debug!("Validated rerank request: {:?}", request);

    let response = container.rerank_use_case().execute(request).await?;

    debug!("Rerank response: {:?}", response);

    Ok(Json(response))
}

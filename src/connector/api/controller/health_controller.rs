use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — liveness probe. Always succeeds; deliberately checks
/// nothing about the model.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

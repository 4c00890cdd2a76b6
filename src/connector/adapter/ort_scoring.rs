use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::application::ScoringService;
use crate::domain::{Document, DomainError};

const DEFAULT_MODEL_ID: &str = "cross-encoder/ms-marco-MiniLM-L-6-v2";
const DEFAULT_MAX_SEQ_LENGTH: usize = 512;
const BATCH_SIZE: usize = 32;

/// Cross-encoder scoring backed by ONNX Runtime.
///
/// Model and tokenizer files are fetched from the Hugging Face Hub on first
/// use and cached (under `cache_dir` when given, otherwise hf-hub's default
/// location). The session is loaded once and shared across requests.
pub struct OrtScoring {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    model_name: String,
    max_sequence_length: usize,
}

impl OrtScoring {
    pub fn new(model_id: Option<&str>, cache_dir: Option<&Path>) -> Result<Self, DomainError> {
        let model_id = model_id.unwrap_or(DEFAULT_MODEL_ID);
        info!("Initializing ORT scoring service with model: {}", model_id);

        let mut api_builder = hf_hub::api::sync::ApiBuilder::new().with_progress(true);
        if let Some(dir) = cache_dir {
            info!("Using model cache directory: {:?}", dir);
            api_builder = api_builder.with_cache_dir(dir.to_path_buf());
        }
        let api = api_builder
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to create HF API: {}", e)))?;

        let repo = api.model(model_id.to_string());

        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| DomainError::internal(format!("Failed to download tokenizer: {}", e)))?;

        let model_path = repo
            .get("model.onnx")
            .or_else(|_| repo.get("onnx/model.onnx"))
            .map_err(|e| DomainError::internal(format!("Failed to download ONNX model: {}", e)))?;

        Self::from_paths(model_path, tokenizer_path, model_id)
    }

    pub fn from_paths(
        model_path: PathBuf,
        tokenizer_path: PathBuf,
        model_name: &str,
    ) -> Result<Self, DomainError> {
        info!("Loading ONNX model from: {:?}", model_path);

        let session = Session::builder()
            .map_err(|e| DomainError::internal(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| DomainError::internal(format!("Failed to set optimization level: {}", e)))?
            .commit_from_file(&model_path)
            .map_err(|e| DomainError::internal(format!("Failed to load ONNX model: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| DomainError::internal(format!("Failed to load tokenizer: {}", e)))?;

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name: model_name.to_string(),
            max_sequence_length: DEFAULT_MAX_SEQ_LENGTH,
        })
    }

    fn score_batch(&self, query: &str, contents: &[&str]) -> Result<Vec<f32>, DomainError> {
        if contents.is_empty() {
            return Ok(vec![]);
        }

        let batch_size = contents.len();

        // Tokenize query-document pairs
        let pairs: Vec<(&str, &str)> = contents.iter().map(|content| (query, *content)).collect();

        let encodings = self
            .tokenizer
            .encode_batch(pairs, true)
            .map_err(|e| DomainError::scoring(format!("Tokenization failed: {}", e)))?;

        let max_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0)
            .min(self.max_sequence_length);

        let mut input_ids: Vec<i64> = Vec::with_capacity(batch_size * max_len);
        let mut attention_mask: Vec<i64> = Vec::with_capacity(batch_size * max_len);

        for encoding in &encodings {
            let ids = encoding.get_ids();
            let mask = encoding.get_attention_mask();

            let len = ids.len().min(max_len);

            input_ids.extend(ids[..len].iter().map(|&x| x as i64));
            attention_mask.extend(mask[..len].iter().map(|&x| x as i64));

            let padding = max_len - len;
            input_ids.extend(std::iter::repeat_n(0i64, padding));
            attention_mask.extend(std::iter::repeat_n(0i64, padding));
        }

        let shape = [batch_size, max_len];
        let input_ids_tensor = Tensor::from_array((shape, input_ids)).map_err(|e| {
            DomainError::scoring(format!("Failed to create input_ids tensor: {}", e))
        })?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask)).map_err(|e| {
            DomainError::scoring(format!("Failed to create attention_mask tensor: {}", e))
        })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| DomainError::internal(format!("Failed to lock session: {}", e)))?;

        let outputs = session
            .run(ort::inputs![
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
            ])
            .map_err(|e| DomainError::scoring(format!("Inference failed: {}", e)))?;

        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or_else(|| DomainError::scoring("No output tensor found"))?;

        let (shape, data) = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| DomainError::scoring(format!("Failed to extract output tensor: {}", e)))?;

        let shape: Vec<usize> = shape.iter().map(|&x| x as usize).collect();
        debug!("Output tensor shape: {:?}", shape);

        // Extract logits and apply sigmoid normalization
        let scores = if shape.len() == 2 && shape[1] == 1 {
            // Shape: [batch_size, 1] - direct logits
            data.iter()
                .take(batch_size)
                .map(|&logit| sigmoid(logit))
                .collect()
        } else if shape.len() == 1 {
            // Shape: [batch_size] - already squeezed
            data.iter()
                .take(batch_size)
                .map(|&logit| sigmoid(logit))
                .collect()
        } else {
            return Err(DomainError::scoring(format!(
                "Unexpected output tensor shape: {:?}",
                shape
            )));
        };

        Ok(scores)
    }
}

#[async_trait]
impl ScoringService for OrtScoring {
    async fn score(&self, query: &str, documents: &[Document]) -> Result<Vec<f32>, DomainError> {
        if documents.is_empty() {
            return Ok(vec![]);
        }

        debug!("Scoring {} documents for query: {}", documents.len(), query);

        let contents: Vec<&str> = documents.iter().map(|doc| doc.content.as_str()).collect();

        let mut all_scores = Vec::with_capacity(documents.len());

        for batch in contents.chunks(BATCH_SIZE) {
            let scores = self.score_batch(query, batch)?;
            all_scores.extend(scores);
        }

        Ok(all_scores)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

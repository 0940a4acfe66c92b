//! Embedding routes.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{ApiClient, ClientError};

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub text: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub embedding: Vec<f32>,
    pub model: String,
    pub dimensions: usize,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct BatchEmbeddingRequest {
    pub texts: Vec<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEmbeddingResponse {
    pub embeddings: Vec<Vec<f32>>,
    pub model: String,
    pub dimensions: usize,
}

impl ApiClient {
    /// POST `/embedding/generate`.
    pub async fn generate_embedding(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, ClientError> {
        self.post_json("/embedding/generate", request).await
    }

    /// POST `/embedding/batch`.
    pub async fn generate_batch_embeddings(
        &self,
        request: &BatchEmbeddingRequest,
    ) -> Result<BatchEmbeddingResponse, ClientError> {
        self.post_json("/embedding/batch", request).await
    }
}

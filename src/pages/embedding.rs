//! Embedding page.

use async_trait::async_trait;
use itertools::Itertools;

use crate::api::embedding::{EmbeddingRequest, EmbeddingResponse};
use crate::client::{ApiClient, ClientError};
use crate::options::DEFAULT_EMBEDDING_MODEL;
use crate::pages::{require_trimmed, Form, Panel, TEXT_REQUIRED};

/// How many vector elements the preview renders.
const PREVIEW_LEN: usize = 10;

/// Form state for `/embedding/generate`.
///
/// The full vector is retained in the panel output; only [`preview`] is meant
/// for display.
#[derive(Debug, Clone)]
pub struct EmbeddingForm {
    pub text: String,
    pub model: String,
}

impl Default for EmbeddingForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl Form for EmbeddingForm {
    type Output = EmbeddingResponse;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.text, TEXT_REQUIRED)
    }

    async fn send(&self, client: &ApiClient) -> Result<EmbeddingResponse, ClientError> {
        let request = EmbeddingRequest {
            text: self.text.clone(),
            model: Some(self.model.clone()),
        };
        client.generate_embedding(&request).await
    }
}

pub type EmbeddingPage = Panel<EmbeddingForm>;

impl Panel<EmbeddingForm> {
    /// Bounded rendering of the current vector, if one is on display.
    pub fn preview(&self) -> Option<String> {
        self.output().map(|response| preview(&response.embedding))
    }
}

/// Render a bounded prefix of the vector: the first ten values at four
/// decimal places, then the total dimension count.
pub fn preview(values: &[f32]) -> String {
    let head = values
        .iter()
        .take(PREVIEW_LEN)
        .map(|value| format!("{value:.4}"))
        .join(", ");
    format!("{head}, ... (全{}次元)", values.len())
}

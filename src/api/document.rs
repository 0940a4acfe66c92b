//! Document analysis route.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::api::FilePart;
use crate::client::{ApiClient, ClientError};

/// Multipart payload for `/document/analyze`.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzeRequest {
    pub file: FilePart,
    pub prompt: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalyzeResponse {
    pub analysis: String,
    pub model: String,
    pub page_count: Option<u32>,
}

impl ApiClient {
    /// POST `/document/analyze` (multipart).
    pub async fn analyze_document(
        &self,
        request: DocumentAnalyzeRequest,
    ) -> Result<DocumentAnalyzeResponse, ClientError> {
        let mut form = Form::new()
            .part("file", request.file.into_part()?)
            .text("prompt", request.prompt);
        if let Some(model) = request.model {
            form = form.text("model", model);
        }
        self.post_multipart("/document/analyze", form).await
    }
}

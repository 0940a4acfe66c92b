//! Structured output route.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::client::{ApiClient, ClientError};

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct StructuredOutputRequest {
    pub prompt: String,
    /// JSON Schema the returned `data` object must conform to.
    pub schema: Value,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredOutputResponse {
    pub data: Value,
    pub model: String,
}

impl ApiClient {
    /// POST `/structured-output/generate`.
    pub async fn generate_structured(
        &self,
        request: &StructuredOutputRequest,
    ) -> Result<StructuredOutputResponse, ClientError> {
        self.post_json("/structured-output/generate", request).await
    }
}

//! Video generation route.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{ApiClient, ClientError};

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct VideoGenerateRequest {
    pub prompt: String,
    pub model: Option<String>,
    /// Clip length in seconds.
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGenerateResponse {
    pub video_url: String,
    pub model: String,
    pub status: String,
}

impl ApiClient {
    /// POST `/video/generate`.
    pub async fn generate_video(
        &self,
        request: &VideoGenerateRequest,
    ) -> Result<VideoGenerateResponse, ClientError> {
        self.post_json("/video/generate", request).await
    }
}

//! Video generation page.

use async_trait::async_trait;

use crate::api::video::VideoGenerateRequest;
use crate::client::{ApiClient, ClientError};
use crate::options::DEFAULT_VIDEO_MODEL;
use crate::pages::{require_trimmed, Form, Panel, PROMPT_REQUIRED};

/// Form state for `/video/generate`; displays the clip URL.
#[derive(Debug, Clone)]
pub struct VideoForm {
    pub prompt: String,
    pub model: String,
    /// Clip length in seconds.
    pub duration: u32,
}

impl Default for VideoForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: DEFAULT_VIDEO_MODEL.to_string(),
            duration: 5,
        }
    }
}

#[async_trait]
impl Form for VideoForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let request = VideoGenerateRequest {
            prompt: self.prompt.clone(),
            model: Some(self.model.clone()),
            duration: Some(self.duration),
        };
        let response = client.generate_video(&request).await?;
        Ok(response.video_url)
    }
}

pub type VideoPage = Panel<VideoForm>;

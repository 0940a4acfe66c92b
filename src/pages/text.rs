//! Text generation page.

use async_trait::async_trait;

use crate::api::text::TextGenerateRequest;
use crate::client::{ApiClient, ClientError};
use crate::options::DEFAULT_CHAT_MODEL;
use crate::pages::{require_trimmed, Form, Panel, PROMPT_REQUIRED};

/// Form state for `/text/generate`; displays the generated text.
#[derive(Debug, Clone)]
pub struct TextForm {
    pub prompt: String,
    pub model: String,
}

impl Default for TextForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl Form for TextForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let request = TextGenerateRequest {
            prompt: self.prompt.clone(),
            model: Some(self.model.clone()),
            temperature: None,
            max_tokens: None,
        };
        let response = client.generate_text(&request).await?;
        Ok(response.text)
    }
}

pub type TextPage = Panel<TextForm>;

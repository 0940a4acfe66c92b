//! Text generation routes.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{ApiClient, ClientError};

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerateRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl TextGenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextGenerateResponse {
    pub text: String,
    pub model: String,
}

/// One turn of a chat conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub model: String,
}

impl ApiClient {
    /// POST `/text/generate`.
    pub async fn generate_text(
        &self,
        request: &TextGenerateRequest,
    ) -> Result<TextGenerateResponse, ClientError> {
        self.post_json("/text/generate", request).await
    }

    /// POST `/text/chat`.
    pub async fn chat_text(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.post_json("/text/chat", request).await
    }
}

//! Speech synthesis page.

use async_trait::async_trait;

use crate::api::audio::AudioGenerateRequest;
use crate::client::{ApiClient, ClientError};
use crate::options::DEFAULT_TTS_MODEL;
use crate::pages::{require_trimmed, Form, Panel, TEXT_REQUIRED};

/// Form state for `/audio/generate`; displays the audio URL.
#[derive(Debug, Clone)]
pub struct AudioForm {
    pub text: String,
    /// Prebuilt voice name; the backend picks its default when unset.
    pub voice: Option<String>,
    pub model: String,
}

impl Default for AudioForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice: None,
            model: DEFAULT_TTS_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl Form for AudioForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.text, TEXT_REQUIRED)
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let request = AudioGenerateRequest {
            text: self.text.clone(),
            voice: self.voice.clone(),
            model: Some(self.model.clone()),
        };
        let response = client.generate_audio(&request).await?;
        Ok(response.audio_url)
    }
}

pub type AudioPage = Panel<AudioForm>;

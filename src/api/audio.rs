//! Audio routes: speech synthesis and transcription.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::api::FilePart;
use crate::client::{ApiClient, ClientError};

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct AudioGenerateRequest {
    pub text: String,
    pub voice: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioGenerateResponse {
    pub audio_url: String,
    pub model: String,
}

/// Multipart payload for `/audio/transcribe`.
#[derive(Debug, Clone)]
pub struct AudioTranscribeRequest {
    pub file: FilePart,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTranscribeResponse {
    pub text: String,
    pub language: String,
}

impl ApiClient {
    /// POST `/audio/generate`.
    pub async fn generate_audio(
        &self,
        request: &AudioGenerateRequest,
    ) -> Result<AudioGenerateResponse, ClientError> {
        self.post_json("/audio/generate", request).await
    }

    /// POST `/audio/transcribe` (multipart).
    pub async fn transcribe_audio(
        &self,
        request: AudioTranscribeRequest,
    ) -> Result<AudioTranscribeResponse, ClientError> {
        let mut form = Form::new().part("file", request.file.into_part()?);
        if let Some(language) = request.language {
            form = form.text("language", language);
        }
        self.post_multipart("/audio/transcribe", form).await
    }
}

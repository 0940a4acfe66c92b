//! Image routes: generation, editing, composition, analysis and the
//! multi-turn chat variant.

use nonempty::NonEmpty;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::api::FilePart;
use crate::client::{ApiClient, ClientError};
use crate::options::{AspectRatio, Resolution};

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerateRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerateResponse {
    pub image_url: String,
    pub model: String,
    pub aspect_ratio: Option<String>,
    pub resolution: Option<String>,
}

/// Multipart payload for `/image/edit`.
#[derive(Debug, Clone)]
pub struct ImageEditRequest {
    pub file: FilePart,
    pub prompt: String,
    pub model: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
}

impl ImageEditRequest {
    fn into_form(self) -> Result<Form, ClientError> {
        let mut form = Form::new()
            .part("file", self.file.into_part()?)
            .text("prompt", self.prompt);
        if let Some(model) = self.model {
            form = form.text("model", model);
        }
        if let Some(ratio) = self.aspect_ratio {
            form = form.text("aspect_ratio", ratio.as_str());
        }
        if let Some(resolution) = self.resolution {
            form = form.text("resolution", resolution.as_str());
        }
        Ok(form)
    }
}

/// Multipart payload for `/image/compose`; at least one source image.
#[derive(Debug, Clone)]
pub struct ImageComposeRequest {
    pub files: NonEmpty<FilePart>,
    pub prompt: String,
    pub model: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
}

impl ImageComposeRequest {
    fn into_form(self) -> Result<Form, ClientError> {
        let mut form = Form::new();
        for file in self.files {
            form = form.part("files", file.into_part()?);
        }
        form = form.text("prompt", self.prompt);
        if let Some(model) = self.model {
            form = form.text("model", model);
        }
        if let Some(ratio) = self.aspect_ratio {
            form = form.text("aspect_ratio", ratio.as_str());
        }
        if let Some(resolution) = self.resolution {
            form = form.text("resolution", resolution.as_str());
        }
        Ok(form)
    }
}

/// One call of the multi-turn image chat.
///
/// `session_id` is absent on the first call; the backend mints one and the
/// caller resends it unchanged for the rest of the conversation.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct ImageChatRequest {
    pub message: String,
    pub model: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageChatResponse {
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub model: String,
    pub session_id: String,
}

/// Multipart payload for `/image/analyze`.
#[derive(Debug, Clone)]
pub struct ImageAnalyzeRequest {
    pub file: FilePart,
    pub prompt: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalyzeResponse {
    pub analysis: String,
    pub model: String,
}

impl ApiClient {
    /// POST `/image/generate`.
    pub async fn generate_image(
        &self,
        request: &ImageGenerateRequest,
    ) -> Result<ImageGenerateResponse, ClientError> {
        self.post_json("/image/generate", request).await
    }

    /// POST `/image/edit` (multipart).
    pub async fn edit_image(
        &self,
        request: ImageEditRequest,
    ) -> Result<ImageGenerateResponse, ClientError> {
        self.post_multipart("/image/edit", request.into_form()?).await
    }

    /// POST `/image/compose` (multipart).
    pub async fn compose_images(
        &self,
        request: ImageComposeRequest,
    ) -> Result<ImageGenerateResponse, ClientError> {
        self.post_multipart("/image/compose", request.into_form()?)
            .await
    }

    /// POST `/image/chat`.
    pub async fn image_chat(
        &self,
        request: &ImageChatRequest,
    ) -> Result<ImageChatResponse, ClientError> {
        self.post_json("/image/chat", request).await
    }

    /// POST `/image/analyze` (multipart).
    pub async fn analyze_image(
        &self,
        request: ImageAnalyzeRequest,
    ) -> Result<ImageAnalyzeResponse, ClientError> {
        let mut form = Form::new()
            .part("file", request.file.into_part()?)
            .text("prompt", request.prompt);
        if let Some(model) = request.model {
            form = form.text("model", model);
        }
        self.post_multipart("/image/analyze", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_chat_call_omits_session_id() {
        let request = ImageChatRequest {
            message: "a cat".to_string(),
            model: Some("gemini-3-pro-image-preview".to_string()),
            aspect_ratio: None,
            resolution: None,
            session_id: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "a cat",
                "model": "gemini-3-pro-image-preview",
            })
        );
    }

    #[test]
    fn test_options_serialize_with_wire_names() {
        let request = ImageGenerateRequest {
            prompt: "sunset".to_string(),
            model: Some("gemini-2.5-flash-image".to_string()),
            aspect_ratio: Some(AspectRatio::SixteenByNine),
            resolution: Some(Resolution::TwoK),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["aspect_ratio"], "16:9");
        assert_eq!(value["resolution"], "2K");
    }
}

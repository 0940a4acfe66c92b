//! Image pages: generation, editing, composition and the multi-turn chat.

use async_trait::async_trait;
use nonempty::NonEmpty;

use crate::api::image::{
    ImageChatRequest, ImageComposeRequest, ImageEditRequest, ImageGenerateRequest,
};
use crate::api::FilePart;
use crate::client::{ApiClient, ClientError};
use crate::options::{AspectRatio, Resolution, DEFAULT_IMAGE_MODEL, PRO_IMAGE_MODEL};
use crate::pages::{
    require_trimmed, Activity, Form, Panel, IMAGE_REQUIRED, MESSAGE_REQUIRED, PROMPT_REQUIRED,
};
use crate::preview::data_url;

/// Model names containing this fragment are rejected before submission.
const DENIED_MODEL_FRAGMENT: &str = "imagen";

pub(crate) const DENIED_MODEL_MESSAGE: &str =
    "imagenモデルはサポートされていません。Nano Bananaモデルを使用してください。";

/// Appended to backend rejections that mention an unsupported model.
const MODEL_GUIDANCE: &str = "\n\n💡 Nano Bananaモデル（gemini-2.5-flash-image または gemini-3-pro-image-preview）を選択してください。";

/// Form state for `/image/generate`; displays the image URL.
#[derive(Debug, Clone)]
pub struct ImageGenerateForm {
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
}

impl Default for ImageGenerateForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            aspect_ratio: None,
            resolution: None,
        }
    }
}

impl ImageGenerateForm {
    /// Model actually submitted: a cleared selector falls back to the default.
    fn selected_model(&self) -> String {
        if self.model.trim().is_empty() {
            DEFAULT_IMAGE_MODEL.to_string()
        } else {
            self.model.clone()
        }
    }
}

#[async_trait]
impl Form for ImageGenerateForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)?;
        if self.selected_model().contains(DENIED_MODEL_FRAGMENT) {
            return Err(ClientError::Validation(format!(
                "{DENIED_MODEL_MESSAGE}{MODEL_GUIDANCE}"
            )));
        }
        Ok(())
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let request = ImageGenerateRequest {
            prompt: self.prompt.clone(),
            model: Some(self.selected_model()),
            aspect_ratio: self.aspect_ratio,
            resolution: self.resolution,
        };
        let response = client
            .generate_image(&request)
            .await
            .map_err(steer_to_supported_models)?;
        Ok(response.image_url)
    }
}

pub type ImageGeneratePage = Panel<ImageGenerateForm>;

/// Rewrite unsupported-model rejections to steer the user to the two models
/// the backend accepts.
fn steer_to_supported_models(error: ClientError) -> ClientError {
    match error {
        ClientError::Server {
            status,
            detail: Some(detail),
            message,
        } if detail.contains(DENIED_MODEL_FRAGMENT) || detail.contains("サポートされていません") => {
            ClientError::Server {
                status,
                detail: Some(format!("{detail}{MODEL_GUIDANCE}")),
                message,
            }
        }
        other => other,
    }
}

/// Form state for `/image/edit`; displays the edited image URL.
#[derive(Debug, Clone)]
pub struct ImageEditForm {
    pub file: Option<FilePart>,
    /// Inline preview of the selected file, set before any upload.
    pub preview: Option<String>,
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
}

impl Default for ImageEditForm {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            prompt: String::new(),
            model: PRO_IMAGE_MODEL.to_string(),
            aspect_ratio: None,
            resolution: None,
        }
    }
}

impl ImageEditForm {
    /// Store the picked file and derive its inline preview.
    pub fn select_file(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        let file = FilePart::new(file_name, bytes);
        self.preview = Some(data_url(&file.file_name, &file.bytes));
        self.file = Some(file);
    }
}

#[async_trait]
impl Form for ImageEditForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)?;
        if self.file.is_none() {
            return Err(ClientError::Validation(IMAGE_REQUIRED.to_string()));
        }
        Ok(())
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| ClientError::Validation(IMAGE_REQUIRED.to_string()))?;
        let request = ImageEditRequest {
            file,
            prompt: self.prompt.clone(),
            model: Some(self.model.clone()),
            aspect_ratio: self.aspect_ratio,
            resolution: self.resolution,
        };
        let response = client.edit_image(request).await?;
        Ok(response.image_url)
    }
}

pub type ImageEditPage = Panel<ImageEditForm>;

/// Form state for `/image/compose`; displays the composed image URL.
#[derive(Debug, Clone)]
pub struct ImageComposeForm {
    pub files: Vec<FilePart>,
    /// Inline previews, one per selected file, in selection order.
    pub previews: Vec<String>,
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
}

impl Default for ImageComposeForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            previews: Vec::new(),
            prompt: String::new(),
            model: PRO_IMAGE_MODEL.to_string(),
            aspect_ratio: None,
            resolution: None,
        }
    }
}

impl ImageComposeForm {
    /// Replace the selection wholesale and derive one preview per file.
    pub fn select_files(&mut self, files: Vec<FilePart>) {
        self.previews = files
            .iter()
            .map(|file| data_url(&file.file_name, &file.bytes))
            .collect();
        self.files = files;
    }
}

#[async_trait]
impl Form for ImageComposeForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)?;
        if self.files.is_empty() {
            return Err(ClientError::Validation(IMAGE_REQUIRED.to_string()));
        }
        Ok(())
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let files = NonEmpty::from_vec(self.files.clone())
            .ok_or_else(|| ClientError::Validation(IMAGE_REQUIRED.to_string()))?;
        let request = ImageComposeRequest {
            files,
            prompt: self.prompt.clone(),
            model: Some(self.model.clone()),
            aspect_ratio: self.aspect_ratio,
            resolution: self.resolution,
        };
        let response = client.compose_images(request).await?;
        Ok(response.image_url)
    }
}

pub type ImageComposePage = Panel<ImageComposeForm>;

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSpeaker {
    User,
    Assistant,
}

/// One displayed turn of the multi-turn image chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub speaker: ChatSpeaker,
    pub text: Option<String>,
    pub image_url: Option<String>,
}

impl ChatEntry {
    fn user(text: String) -> Self {
        Self {
            speaker: ChatSpeaker::User,
            text: Some(text),
            image_url: None,
        }
    }

    fn assistant(text: Option<String>, image_url: Option<String>) -> Self {
        Self {
            speaker: ChatSpeaker::Assistant,
            text,
            image_url,
        }
    }
}

/// Multi-turn image chat page.
///
/// Turns append to a running history instead of replacing it. The user turn
/// is appended optimistically before the call and removed again if the call
/// fails, so the history only ever shows confirmed exchanges. The backend
/// mints a session identifier on the first success; every later call resends
/// it unchanged so the conversation keeps its context.
#[derive(Debug)]
pub struct ImageChatPage {
    /// Message being composed; cleared when a call goes out.
    pub message: String,
    pub model: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub resolution: Option<Resolution>,
    history: Vec<ChatEntry>,
    session_id: Option<String>,
    activity: Activity,
}

impl Default for ImageChatPage {
    fn default() -> Self {
        Self {
            message: String::new(),
            model: PRO_IMAGE_MODEL.to_string(),
            aspect_ratio: None,
            resolution: None,
            history: Vec::new(),
            session_id: None,
            activity: Activity::default(),
        }
    }
}

impl ImageChatPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmed turns, plus the optimistic user turn while a call is out.
    pub fn history(&self) -> &[ChatEntry] {
        &self.history
    }

    /// Identifier minted by the backend on the first successful call.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    pub fn error(&self) -> Option<&str> {
        self.activity.error()
    }

    /// Send the composed message as the next turn of the conversation.
    pub async fn send(&mut self, client: &ApiClient) {
        if self.activity.is_busy() {
            return;
        }
        if let Err(error) = require_trimmed(&self.message, MESSAGE_REQUIRED) {
            self.activity.reject(&error);
            return;
        }

        let message = std::mem::take(&mut self.message);
        self.history.push(ChatEntry::user(message.clone()));

        let request = ImageChatRequest {
            message,
            model: Some(self.model.clone()),
            aspect_ratio: self.aspect_ratio,
            resolution: self.resolution,
            session_id: self.session_id.clone(),
        };
        match self.activity.run(client.image_chat(&request)).await {
            Some(response) => {
                if self.session_id.is_none() {
                    self.session_id = Some(response.session_id);
                }
                self.history
                    .push(ChatEntry::assistant(response.text, response.image_url));
            }
            None => {
                // Take the optimistic user turn back out so the history keeps
                // showing confirmed exchanges only.
                self.history.pop();
            }
        }
    }
}

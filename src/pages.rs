//! Form-state layer: one shared request/response/error contract,
//! instantiated once per backend feature.
//!
//! Every page follows the same cycle: validate required fields locally,
//! gate on the busy flag, issue exactly one call, then either replace the
//! displayed value wholesale or surface a normalized error string. The two
//! chat-style pages append to a running history instead of replacing.

use std::future::Future;

use async_trait::async_trait;

use crate::client::{ApiClient, ClientError};

pub mod agent;
pub mod audio;
pub mod document;
pub mod embedding;
pub mod function_calling;
pub mod image;
pub mod structured_output;
pub mod text;
pub mod video;

// Re-export for convenience
pub use agent::{AgentExchange, AgentPage};
pub use audio::{AudioForm, AudioPage};
pub use document::{DocumentForm, DocumentPage};
pub use embedding::{EmbeddingForm, EmbeddingPage};
pub use function_calling::{
    FunctionCallingForm, FunctionCallingPage, TemperatureUnit, WeatherQuery,
};
pub use image::{
    ChatEntry, ChatSpeaker, ImageChatPage, ImageComposeForm, ImageComposePage, ImageEditForm,
    ImageEditPage, ImageGenerateForm, ImageGeneratePage,
};
pub use structured_output::{ReviewCard, StructuredOutputForm, StructuredOutputPage};
pub use text::{TextForm, TextPage};
pub use video::{VideoForm, VideoPage};

pub(crate) const PROMPT_REQUIRED: &str = "プロンプトを入力してください";
pub(crate) const TEXT_REQUIRED: &str = "テキストを入力してください";
pub(crate) const MESSAGE_REQUIRED: &str = "メッセージを入力してください";
pub(crate) const FILE_REQUIRED: &str = "ファイルを選択してください";
pub(crate) const IMAGE_REQUIRED: &str = "画像を選択してください";

/// Required-field check shared by every form: blank after trimming fails.
pub(crate) fn require_trimmed(value: &str, message: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        Err(ClientError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

/// Tracks one in-flight request plus the error string shown to the user.
#[derive(Debug, Default)]
pub struct Activity {
    busy: bool,
    error: Option<String>,
}

impl Activity {
    /// True exactly while a call is outstanding; gates the trigger control.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The normalized failure message, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Surface a local failure without touching the network.
    pub(crate) fn reject(&mut self, error: &ClientError) {
        self.error = Some(error.user_message());
    }

    /// Drive one call under the busy flag.
    ///
    /// The flag is raised before the call and released on every exit path;
    /// a prior error is cleared before the call goes out, and a failure lands
    /// in `error` already normalized. Returns `None` when gated or failed.
    pub(crate) async fn run<T>(
        &mut self,
        call: impl Future<Output = Result<T, ClientError>>,
    ) -> Option<T> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.error = None;

        let outcome = call.await;

        self.busy = false;
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.error = Some(error.user_message());
                None
            }
        }
    }
}

/// One submit-and-render unit, parameterized by its payload shape and the
/// response fields it projects for display.
#[async_trait]
pub trait Form {
    /// Projection of the response this page displays.
    type Output: Send;

    /// Check required fields before any network traffic. The first failure
    /// surfaces locally; the transport is never invoked.
    fn validate(&self) -> Result<(), ClientError>;

    /// Build the payload and issue the call.
    async fn send(&self, client: &ApiClient) -> Result<Self::Output, ClientError>;
}

/// A form plus its interaction state.
///
/// Successful responses replace the displayed value wholesale; validation
/// failures leave the previous value intact.
pub struct Panel<F: Form> {
    pub form: F,
    activity: Activity,
    output: Option<F::Output>,
}

impl<F: Form + Default> Default for Panel<F> {
    fn default() -> Self {
        Self {
            form: F::default(),
            activity: Activity::default(),
            output: None,
        }
    }
}

impl<F: Form + Sync> Panel<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            activity: Activity::default(),
            output: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    pub fn error(&self) -> Option<&str> {
        self.activity.error()
    }

    /// The value currently on display, if any.
    pub fn output(&self) -> Option<&F::Output> {
        self.output.as_ref()
    }

    /// Run one request/response cycle for the current form state.
    pub async fn submit(&mut self, client: &ApiClient) {
        if self.activity.is_busy() {
            return;
        }
        if let Err(error) = self.form.validate() {
            self.activity.reject(&error);
            return;
        }

        self.output = None;
        let call = self.form.send(client);
        if let Some(value) = self.activity.run(call).await {
            self.output = Some(value);
        }
    }
}

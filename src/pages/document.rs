//! Document analysis page.

use async_trait::async_trait;

use crate::api::document::DocumentAnalyzeRequest;
use crate::api::FilePart;
use crate::client::{ApiClient, ClientError};
use crate::pages::{Form, Panel, FILE_REQUIRED};

/// Prompt used when the user leaves the field blank.
const SUMMARIZE_PROMPT: &str = "このドキュメントの内容を要約してください";

/// Form state for `/document/analyze`; displays the analysis text.
///
/// The prompt is optional here: a blank one falls back to a summary request.
#[derive(Debug, Clone, Default)]
pub struct DocumentForm {
    pub file: Option<FilePart>,
    pub prompt: String,
}

impl DocumentForm {
    fn effective_prompt(&self) -> String {
        let trimmed = self.prompt.trim();
        if trimmed.is_empty() {
            SUMMARIZE_PROMPT.to_string()
        } else {
            self.prompt.clone()
        }
    }
}

#[async_trait]
impl Form for DocumentForm {
    type Output = String;

    fn validate(&self) -> Result<(), ClientError> {
        if self.file.is_none() {
            return Err(ClientError::Validation(FILE_REQUIRED.to_string()));
        }
        Ok(())
    }

    async fn send(&self, client: &ApiClient) -> Result<String, ClientError> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| ClientError::Validation(FILE_REQUIRED.to_string()))?;
        let request = DocumentAnalyzeRequest {
            file,
            prompt: self.effective_prompt(),
            model: None,
        };
        let response = client.analyze_document(request).await?;
        Ok(response.analysis)
    }
}

pub type DocumentPage = Panel<DocumentForm>;

//! Typed request/response surface of the backend, one module per route group.

use std::path::Path;

use futures::future::try_join_all;

use crate::client::ClientError;

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
pub use agent::{AgentChatRequest, AgentChatResponse};
pub use audio::{
    AudioGenerateRequest, AudioGenerateResponse, AudioTranscribeRequest, AudioTranscribeResponse,
};
pub use document::{DocumentAnalyzeRequest, DocumentAnalyzeResponse};
pub use embedding::{
    BatchEmbeddingRequest, BatchEmbeddingResponse, EmbeddingRequest, EmbeddingResponse,
};
pub use function_calling::{
    FunctionCall, FunctionCallingRequest, FunctionCallingResponse, FunctionDefinition,
};
pub use image::{
    ImageAnalyzeRequest, ImageAnalyzeResponse, ImageChatRequest, ImageChatResponse,
    ImageComposeRequest, ImageEditRequest, ImageGenerateRequest, ImageGenerateResponse,
};
pub use structured_output::{StructuredOutputRequest, StructuredOutputResponse};
pub use text::{ChatMessage, ChatRequest, ChatResponse, TextGenerateRequest, TextGenerateResponse};
pub use video::{VideoGenerateRequest, VideoGenerateResponse};

/// In-memory file attached to a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Name reported to the backend; also drives MIME detection.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Load a file from disk, using its final path component as the name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            ClientError::Request(format!("failed to read {}: {err}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(Self { file_name, bytes })
    }

    /// Load several files concurrently, preserving order.
    pub async fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Self>, ClientError> {
        try_join_all(paths.iter().map(|path| Self::from_path(path))).await
    }

    /// MIME type guessed from the file name, e.g. `image/png`.
    pub fn mime(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, ClientError> {
        let mime = self.mime();
        reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&mime)
            .map_err(ClientError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guessed_from_file_name() {
        let part = FilePart::new("photo.png", vec![1, 2, 3]);
        assert_eq!(part.mime(), "image/png");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let part = FilePart::new("blob.xyzzy", vec![]);
        assert_eq!(part.mime(), "application/octet-stream");
    }
}

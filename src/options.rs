//! Shared request option types and the backend's default model identifiers.

use serde::{Deserialize, Serialize};

/// Default model for plain text generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default model for chat and long-form reasoning.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";
/// Default model for document, image and video analysis.
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-pro-preview";
/// Default image generation model.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Higher-quality image model used by the edit/compose/chat forms.
pub const PRO_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
/// Default video generation model.
pub const DEFAULT_VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";
/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";
/// Default text-to-speech model.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
/// Default model for structured output.
pub const DEFAULT_STRUCTURED_MODEL: &str = "gemini-3-pro";

/// Output aspect ratios the image routes accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "2:3")]
    TwoByThree,
    #[serde(rename = "3:2")]
    ThreeByTwo,
    #[serde(rename = "3:4")]
    ThreeByFour,
    #[serde(rename = "4:3")]
    FourByThree,
    #[serde(rename = "4:5")]
    FourByFive,
    #[serde(rename = "5:4")]
    FiveByFour,
    #[serde(rename = "9:16")]
    NineBySixteen,
    #[serde(rename = "16:9")]
    SixteenByNine,
    #[serde(rename = "21:9")]
    TwentyOneByNine,
}

impl AspectRatio {
    /// All ratios, in the order the backend documents them.
    pub const ALL: [AspectRatio; 10] = [
        AspectRatio::Square,
        AspectRatio::TwoByThree,
        AspectRatio::ThreeByTwo,
        AspectRatio::ThreeByFour,
        AspectRatio::FourByThree,
        AspectRatio::FourByFive,
        AspectRatio::FiveByFour,
        AspectRatio::NineBySixteen,
        AspectRatio::SixteenByNine,
        AspectRatio::TwentyOneByNine,
    ];

    /// Wire representation, e.g. `"16:9"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::TwoByThree => "2:3",
            AspectRatio::ThreeByTwo => "3:2",
            AspectRatio::ThreeByFour => "3:4",
            AspectRatio::FourByThree => "4:3",
            AspectRatio::FourByFive => "4:5",
            AspectRatio::FiveByFour => "5:4",
            AspectRatio::NineBySixteen => "9:16",
            AspectRatio::SixteenByNine => "16:9",
            AspectRatio::TwentyOneByNine => "21:9",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output resolutions the image routes accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl Resolution {
    /// Wire representation, e.g. `"2K"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::OneK => "1K",
            Resolution::TwoK => "2K",
            Resolution::FourK => "4K",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in tools the agent route recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentTool {
    GoogleSearch,
    GoogleMaps,
    UrlContext,
    CodeExecution,
    FileSearch,
}

impl AgentTool {
    /// Wire name, e.g. `"google_search"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentTool::GoogleSearch => "google_search",
            AgentTool::GoogleMaps => "google_maps",
            AgentTool::UrlContext => "url_context",
            AgentTool::CodeExecution => "code_execution",
            AgentTool::FileSearch => "file_search",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_wire_format() {
        let value = serde_json::to_value(AspectRatio::SixteenByNine).unwrap();
        assert_eq!(value, serde_json::json!("16:9"));

        let parsed: AspectRatio = serde_json::from_value(serde_json::json!("21:9")).unwrap();
        assert_eq!(parsed, AspectRatio::TwentyOneByNine);
    }

    #[test]
    fn test_aspect_ratio_as_str_matches_serde() {
        for ratio in AspectRatio::ALL {
            let value = serde_json::to_value(ratio).unwrap();
            assert_eq!(value, serde_json::json!(ratio.as_str()));
        }
    }

    #[test]
    fn test_resolution_wire_format() {
        let value = serde_json::to_value(Resolution::FourK).unwrap();
        assert_eq!(value, serde_json::json!("4K"));
    }

    #[test]
    fn test_agent_tool_wire_format() {
        let value = serde_json::to_value(AgentTool::GoogleSearch).unwrap();
        assert_eq!(value, serde_json::json!("google_search"));
    }
}

//! Agent chat route.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{ApiClient, ClientError};
use crate::options::AgentTool;

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct AgentChatRequest {
    pub prompt: String,
    /// Tools the agent may use; omitted entirely when none are selected.
    pub tools: Option<Vec<AgentTool>>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentChatResponse {
    pub response: String,
    pub tools_used: Vec<String>,
    pub model: String,
}

impl ApiClient {
    /// POST `/agent/chat`.
    pub async fn agent_chat(
        &self,
        request: &AgentChatRequest,
    ) -> Result<AgentChatResponse, ClientError> {
        self.post_json("/agent/chat", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tool_selection_is_absent() {
        let request = AgentChatRequest {
            prompt: "調べて".to_string(),
            tools: None,
            model: Some("gemini-3-pro-preview".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_tools_serialize_with_wire_names() {
        let request = AgentChatRequest {
            prompt: "調べて".to_string(),
            tools: Some(vec![AgentTool::GoogleSearch, AgentTool::CodeExecution]),
            model: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["tools"],
            serde_json::json!(["google_search", "code_execution"])
        );
    }
}

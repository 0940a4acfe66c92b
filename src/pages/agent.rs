//! Agent page.

use crate::api::agent::AgentChatRequest;
use crate::client::ApiClient;
use crate::options::{AgentTool, DEFAULT_CHAT_MODEL};
use crate::pages::{require_trimmed, Activity, PROMPT_REQUIRED};

/// One confirmed agent exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentExchange {
    pub prompt: String,
    pub tools_used: Vec<String>,
    pub response: String,
}

/// Agent chat page.
///
/// Each successful call appends an exchange to a running history; earlier
/// exchanges are never replaced.
#[derive(Debug)]
pub struct AgentPage {
    pub prompt: String,
    /// Tools the user has toggled on, in toggle order.
    pub tools: Vec<AgentTool>,
    pub model: String,
    history: Vec<AgentExchange>,
    activity: Activity,
}

impl Default for AgentPage {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            tools: Vec::new(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            history: Vec::new(),
            activity: Activity::default(),
        }
    }
}

impl AgentPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a tool in or out of the selection.
    pub fn toggle_tool(&mut self, tool: AgentTool) {
        if let Some(index) = self.tools.iter().position(|candidate| *candidate == tool) {
            self.tools.remove(index);
        } else {
            self.tools.push(tool);
        }
    }

    /// Confirmed exchanges, oldest first.
    pub fn history(&self) -> &[AgentExchange] {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    pub fn error(&self) -> Option<&str> {
        self.activity.error()
    }

    /// Run the agent once for the current prompt and tool selection.
    pub async fn send(&mut self, client: &ApiClient) {
        if self.activity.is_busy() {
            return;
        }
        if let Err(error) = require_trimmed(&self.prompt, PROMPT_REQUIRED) {
            self.activity.reject(&error);
            return;
        }

        let request = AgentChatRequest {
            prompt: self.prompt.clone(),
            tools: if self.tools.is_empty() {
                None
            } else {
                Some(self.tools.clone())
            },
            model: Some(self.model.clone()),
        };
        if let Some(response) = self.activity.run(client.agent_chat(&request)).await {
            self.history.push(AgentExchange {
                prompt: request.prompt,
                tools_used: response.tools_used,
                response: response.response,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_tool_adds_then_removes() {
        let mut page = AgentPage::new();
        page.toggle_tool(AgentTool::GoogleSearch);
        page.toggle_tool(AgentTool::GoogleMaps);
        assert_eq!(page.tools, [AgentTool::GoogleSearch, AgentTool::GoogleMaps]);

        page.toggle_tool(AgentTool::GoogleSearch);
        assert_eq!(page.tools, [AgentTool::GoogleMaps]);
    }
}

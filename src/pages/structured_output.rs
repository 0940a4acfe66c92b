//! Structured output page.

use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::structured_output::StructuredOutputRequest;
use crate::client::{ApiClient, ClientError};
use crate::options::DEFAULT_STRUCTURED_MODEL;
use crate::pages::{require_trimmed, Form, Panel, PROMPT_REQUIRED};

/// Shape the structured-output demo asks the model to fill in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewCard {
    pub title: String,
    pub summary: String,
    pub tags: Option<Vec<String>>,
    #[schemars(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
}

/// Form state for `/structured-output/generate`; displays the returned
/// `data` object.
#[derive(Debug, Clone)]
pub struct StructuredOutputForm {
    pub prompt: String,
    pub model: String,
}

impl Default for StructuredOutputForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: DEFAULT_STRUCTURED_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl Form for StructuredOutputForm {
    type Output = Value;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)
    }

    async fn send(&self, client: &ApiClient) -> Result<Value, ClientError> {
        let request = StructuredOutputRequest {
            prompt: self.prompt.clone(),
            schema: serde_json::to_value(schema_for!(ReviewCard))?,
            model: Some(self.model.clone()),
        };
        let response = client.generate_structured(&request).await?;
        Ok(response.data)
    }
}

pub type StructuredOutputPage = Panel<StructuredOutputForm>;

impl Panel<StructuredOutputForm> {
    /// Pretty-printed rendering of the object on display.
    pub fn rendered(&self) -> Option<String> {
        self.output()
            .and_then(|data| serde_json::to_string_pretty(data).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_card_schema_requires_title_and_summary() {
        let schema = serde_json::to_value(schema_for!(ReviewCard)).unwrap();
        let required = schema["required"].as_array().unwrap();
        let required: Vec<_> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(required, ["summary", "title"]);
    }
}

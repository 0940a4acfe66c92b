//! Function calling page.

use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::api::function_calling::{
    FunctionCallingRequest, FunctionCallingResponse, FunctionDefinition,
};
use crate::client::{ApiClient, ClientError};
use crate::options::DEFAULT_TEXT_MODEL;
use crate::pages::{require_trimmed, Form, Panel, PROMPT_REQUIRED};

/// Parameters of the built-in `get_weather` demo function.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeatherQuery {
    /// 都市名
    pub city: String,
    /// 温度の単位
    pub unit: Option<TemperatureUnit>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// The declaration sent with every call from this page.
pub fn weather_function() -> Result<FunctionDefinition, ClientError> {
    let schema = serde_json::to_value(schema_for!(WeatherQuery))?;
    Ok(FunctionDefinition {
        name: "get_weather".to_string(),
        description: "指定された都市の天気を取得する".to_string(),
        parameters: schema,
    })
}

/// Form state for `/function-calling/call`; displays the whole response.
#[derive(Debug, Clone)]
pub struct FunctionCallingForm {
    pub prompt: String,
    pub model: String,
}

impl Default for FunctionCallingForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl Form for FunctionCallingForm {
    type Output = FunctionCallingResponse;

    fn validate(&self) -> Result<(), ClientError> {
        require_trimmed(&self.prompt, PROMPT_REQUIRED)
    }

    async fn send(&self, client: &ApiClient) -> Result<FunctionCallingResponse, ClientError> {
        let request = FunctionCallingRequest {
            prompt: self.prompt.clone(),
            functions: vec![weather_function()?],
            model: Some(self.model.clone()),
        };
        client.call_functions(&request).await
    }
}

pub type FunctionCallingPage = Panel<FunctionCallingForm>;

impl Panel<FunctionCallingForm> {
    /// Pretty-printed rendering of the response on display.
    pub fn rendered(&self) -> Option<String> {
        self.output()
            .and_then(|response| serde_json::to_string_pretty(response).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_schema_requires_city_only() {
        let definition = weather_function().unwrap();
        assert_eq!(definition.name, "get_weather");

        let required = definition.parameters["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "city");

        let unit = &definition.parameters["properties"]["unit"];
        assert!(unit.is_object());
    }
}

//! Function calling route.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::client::{ApiClient, ClientError};

/// Declaration of a callable function, JSON Schema parameters included.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct FunctionCallingRequest {
    pub prompt: String,
    pub functions: Vec<FunctionDefinition>,
    pub model: Option<String>,
}

/// A call the model decided to make.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCallingResponse {
    pub function_calls: Vec<FunctionCall>,
    pub text: Option<String>,
    pub model: String,
}

impl ApiClient {
    /// POST `/function-calling/call`.
    pub async fn call_functions(
        &self,
        request: &FunctionCallingRequest,
    ) -> Result<FunctionCallingResponse, ClientError> {
        self.post_json("/function-calling/call", request).await
    }
}

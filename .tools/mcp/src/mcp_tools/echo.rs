use crate::mcp_core::{McpResult, McpTool};
use super::Tool;
use serde::Deserialize;

#[derive(Deserialize)]
struct EchoParams {
    message: String,
}

pub struct EchoTool;

impl EchoTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for EchoTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "echo".to_string(),
            description: "Echo back the input message".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The message to echo back"
                    }
                },
                "required": ["message"]
            }),
        }
    }

    fn execute(&self, params: serde_json::Value) -> McpResult<serde_json::Value> {
        let echo_params: EchoParams =
            serde_json::from_value(params).map_err(|e| format!("Invalid parameters: {}", e))?;
        let result = serde_json::json!({
            "content": [
                {
                    "type": "text",
                    "text": echo_params.message
                }
            ]
        });
        Ok(result)
    }
}

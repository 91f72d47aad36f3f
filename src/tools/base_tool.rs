//! Base tool definitions.
//!
//! Provides the `BaseTool` trait implemented by callable tools and the
//! `ToolSpec` description handed to an LLM for function calling.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utilities::errors::{ExecutionError, ToolArgumentError};

// ---------------------------------------------------------------------------
// BaseTool trait
// ---------------------------------------------------------------------------

/// Abstract base trait for all tools an agent can invoke.
#[async_trait]
pub trait BaseTool: Send + Sync + fmt::Debug {
    /// The unique name of the tool that clearly communicates its purpose.
    fn name(&self) -> &str;

    /// Description used to tell the model how/when/why to use the tool.
    fn description(&self) -> &str;

    /// JSON schema for the arguments that the tool accepts.
    fn args_schema(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }

    /// Whether the tool result should be the final agent answer.
    fn result_as_answer(&self) -> bool {
        false
    }

    /// Synchronous execution of the tool.
    fn run(&self, args: HashMap<String, Value>) -> Result<Value, ExecutionError>;

    /// Asynchronous execution of the tool.
    ///
    /// Default implementation calls `run` synchronously.
    async fn arun(&self, args: HashMap<String, Value>) -> Result<Value, ExecutionError> {
        self.run(args)
    }

    /// Describe this tool for LLM function calling.
    fn to_spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.args_schema(),
        }
    }
}

/// Deserialize raw tool-call arguments into the tool's schema struct.
pub fn parse_args<T: DeserializeOwned>(
    tool: &str,
    args: HashMap<String, Value>,
) -> Result<T, ExecutionError> {
    serde_json::from_value(Value::Object(args.into_iter().collect())).map_err(|source| {
        Box::new(ToolArgumentError {
            tool: tool.to_string(),
            source,
        }) as ExecutionError
    })
}

// ---------------------------------------------------------------------------
// ToolSpec
// ---------------------------------------------------------------------------

/// Name, description and argument schema of a tool, as exposed to an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema object for the arguments.
    pub parameters: Value,
}

impl ToolSpec {
    /// OpenAI-style function definition.
    pub fn to_function_schema(&self) -> Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

/// Describe a list of tools for LLM function calling.
pub fn to_tool_specs(tools: &[Box<dyn BaseTool>]) -> Vec<ToolSpec> {
    tools.iter().map(|t| t.to_spec()).collect()
}

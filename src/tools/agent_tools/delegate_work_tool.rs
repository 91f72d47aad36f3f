//! Delegate work tool.
//!
//! Allows an agent to delegate tasks to coworkers.
//!
//! The exposed tool name spells "coworker" in one word, matching the wording
//! of the bundled tool descriptions and not-found guidance.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::delegator::Delegator;
use crate::tools::base_tool::{parse_args, BaseTool};
use crate::utilities::errors::{DelegationError, ExecutionError};

/// Tool name exposed to the model.
pub const DELEGATE_WORK_TOOL_NAME: &str = "Delegate work to coworker";

/// Schema for delegate work tool arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateWorkToolSchema {
    /// The task to delegate.
    pub task: String,
    /// The context for the task.
    pub context: String,
    /// The role/name of the coworker to delegate to.
    pub coworker: String,
}

/// Tool for delegating work to coworkers.
///
/// Enables an agent to delegate a specific task to another agent (coworker)
/// within the crew. The delegated agent executes the task and its answer is
/// returned as the tool result.
#[derive(Debug, Clone)]
pub struct DelegateWorkTool {
    /// Tool name.
    pub name: String,
    /// Tool description (includes available coworkers).
    pub description: String,
    delegator: Arc<Delegator>,
}

impl DelegateWorkTool {
    /// Create a new `DelegateWorkTool`.
    pub fn new(description: impl Into<String>, delegator: Arc<Delegator>) -> Self {
        Self {
            name: DELEGATE_WORK_TOOL_NAME.to_string(),
            description: description.into(),
            delegator,
        }
    }

    /// Get the JSON schema for the tool's arguments.
    pub fn schema() -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "task": {
                    "type": "string",
                    "description": "The task to delegate"
                },
                "context": {
                    "type": "string",
                    "description": "The context for the task"
                },
                "coworker": {
                    "type": "string",
                    "description": "The role/name of the coworker to delegate to"
                }
            },
            "required": ["task", "context", "coworker"]
        })
    }

    /// Execute the delegation.
    pub fn delegate(&self, args: &DelegateWorkToolSchema) -> Result<String, DelegationError> {
        self.delegator
            .delegate_work(&args.coworker, &args.task, &args.context)
    }
}

impl BaseTool for DelegateWorkTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn args_schema(&self) -> Value {
        Self::schema()
    }

    fn run(&self, args: HashMap<String, Value>) -> Result<Value, ExecutionError> {
        let args: DelegateWorkToolSchema = parse_args(&self.name, args)?;
        self.delegate(&args)
            .map(Value::String)
            .map_err(DelegationError::into_execution_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::agents::{BaseAgent, CallbackAgent};

    fn args(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    fn tool(seen: Arc<Mutex<Vec<String>>>) -> DelegateWorkTool {
        let researcher = CallbackAgent::new("Researcher", move |task, ctx| {
            seen.lock().unwrap().push(task.description.clone());
            Ok(format!("found it ({})", ctx.unwrap_or_default()))
        });
        let researcher: Arc<dyn BaseAgent> = Arc::new(researcher);
        DelegateWorkTool::new("delegate", Arc::new(Delegator::new(vec![researcher])))
    }

    #[test]
    fn test_run_dispatches_to_coworker() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let tool = tool(seen.clone());
        let result = tool
            .run(args(json!({"coworker": "Researcher", "task": "find X", "context": "ctx"})))
            .unwrap();
        assert_eq!(result, json!("found it (ctx)"));
        assert_eq!(*seen.lock().unwrap(), vec!["find X".to_string()]);
    }

    #[test]
    fn test_run_unknown_coworker_returns_guidance() {
        let tool = tool(Arc::new(Mutex::new(Vec::new())));
        let result = tool
            .run(args(json!({"coworker": "Editor", "task": "edit", "context": ""})))
            .unwrap();
        assert!(result.as_str().unwrap().contains("- researcher"));
    }

    #[test]
    fn test_run_rejects_missing_arguments() {
        let tool = tool(Arc::new(Mutex::new(Vec::new())));
        let err = tool.run(args(json!({"coworker": "Researcher"}))).unwrap_err();
        assert!(err.to_string().contains(DELEGATE_WORK_TOOL_NAME));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let tool = tool(Arc::new(Mutex::new(Vec::new())));
        assert_eq!(tool.name(), DELEGATE_WORK_TOOL_NAME);
        assert_eq!(
            tool.args_schema()["required"],
            json!(["task", "context", "coworker"])
        );
        assert!(!tool.result_as_answer());
    }
}

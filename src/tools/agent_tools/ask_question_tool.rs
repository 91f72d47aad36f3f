//! Ask question tool.
//!
//! Allows an agent to ask questions to coworkers. The tool name uses the same
//! one-word "coworker" spelling as the delegate work tool.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::delegator::Delegator;
use crate::tools::base_tool::{parse_args, BaseTool};
use crate::utilities::errors::{DelegationError, ExecutionError};

/// Tool name exposed to the model.
pub const ASK_QUESTION_TOOL_NAME: &str = "Ask question to coworker";

/// Schema for ask question tool arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskQuestionToolSchema {
    /// The question to ask.
    pub question: String,
    /// The context for the question.
    pub context: String,
    /// The role/name of the coworker to ask.
    pub coworker: String,
}

/// Tool for asking questions to coworkers.
///
/// Same dispatch path as [`super::DelegateWorkTool`]; only the argument name
/// and the description differ.
#[derive(Debug, Clone)]
pub struct AskQuestionTool {
    /// Tool name.
    pub name: String,
    /// Tool description (includes available coworkers).
    pub description: String,
    delegator: Arc<Delegator>,
}

impl AskQuestionTool {
    /// Create a new `AskQuestionTool`.
    pub fn new(description: impl Into<String>, delegator: Arc<Delegator>) -> Self {
        Self {
            name: ASK_QUESTION_TOOL_NAME.to_string(),
            description: description.into(),
            delegator,
        }
    }

    /// Get the JSON schema for the tool's arguments.
    pub fn schema() -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The question to ask"
                },
                "context": {
                    "type": "string",
                    "description": "The context for the question"
                },
                "coworker": {
                    "type": "string",
                    "description": "The role/name of the coworker to ask"
                }
            },
            "required": ["question", "context", "coworker"]
        })
    }

    /// Ask the question.
    pub fn ask(&self, args: &AskQuestionToolSchema) -> Result<String, DelegationError> {
        self.delegator
            .ask_question(&args.coworker, &args.question, &args.context)
    }
}

impl BaseTool for AskQuestionTool {
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
        let args: AskQuestionToolSchema = parse_args(&self.name, args)?;
        self.ask(&args)
            .map(Value::String)
            .map_err(DelegationError::into_execution_error)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use thiserror::Error;

    use super::*;
    use crate::agents::{BaseAgent, CallbackAgent};

    #[derive(Debug, Error)]
    #[error("writer is offline")]
    struct Offline;

    fn args(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    fn tool() -> AskQuestionTool {
        let researcher: Arc<dyn BaseAgent> = Arc::new(CallbackAgent::new("Researcher", |task, _| {
            Ok(format!("A: {}", task.description))
        }));
        let writer: Arc<dyn BaseAgent> =
            Arc::new(CallbackAgent::new("Writer", |_, _| Err(Box::new(Offline) as _)));
        AskQuestionTool::new("ask", Arc::new(Delegator::new(vec![researcher, writer])))
    }

    #[test]
    fn test_ask_typed() {
        let answer = tool()
            .ask(&AskQuestionToolSchema {
                question: "what is X?".to_string(),
                context: "we need X".to_string(),
                coworker: "  'RESEARCHER' ".to_string(),
            })
            .unwrap();
        assert_eq!(answer, "A: what is X?");
    }

    #[test]
    fn test_run_propagates_coworker_failure() {
        let err = tool()
            .run(args(json!({"coworker": "writer", "question": "q", "context": "c"})))
            .unwrap_err();
        assert!(err.downcast_ref::<Offline>().is_some());
    }

    #[test]
    fn test_arun_matches_run() {
        let tool = tool();
        let call = json!({"coworker": "Researcher", "question": "why?", "context": ""});
        let sync = tool.run(args(call.clone())).unwrap();
        let async_result = tokio_test::block_on(tool.arun(args(call))).unwrap();
        assert_eq!(sync, async_result);
    }

    #[test]
    fn test_spec_uses_question_argument() {
        let spec = tool().to_spec();
        assert_eq!(spec.name, ASK_QUESTION_TOOL_NAME);
        assert_eq!(spec.description, "ask");
        assert!(spec.parameters["properties"].get("question").is_some());
        assert!(spec.parameters["properties"].get("task").is_none());
    }
}

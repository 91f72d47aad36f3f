//! Base agent abstract definition.

use std::fmt;

use crate::task::Task;
use crate::utilities::errors::ExecutionError;

/// Abstract base trait for all agents that can receive delegated work.
pub trait BaseAgent: Send + Sync + fmt::Debug {
    /// Role of the agent. Co-workers are addressed by this name.
    fn role(&self) -> &str;

    /// Execute a task synchronously and return the agent's answer.
    fn execute_task(&self, task: &Task, context: Option<&str>) -> Result<String, ExecutionError>;
}

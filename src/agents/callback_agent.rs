//! Agent backed by a plain closure.
//!
//! Useful for wiring an existing executor (an LLM loop, a remote service) into
//! a crew without writing a dedicated `BaseAgent` implementation.

use std::fmt;
use std::sync::Arc;

use super::base_agent::BaseAgent;
use crate::task::Task;
use crate::utilities::errors::ExecutionError;

/// Type alias for an agent executor callback.
///
/// Takes the task and the optional shared context, returns the agent's answer.
pub type AgentExecutorFn =
    Arc<dyn Fn(&Task, Option<&str>) -> Result<String, ExecutionError> + Send + Sync>;

/// A `BaseAgent` whose task execution is delegated to a callback.
#[derive(Clone)]
pub struct CallbackAgent {
    pub role: String,
    executor: AgentExecutorFn,
}

impl fmt::Debug for CallbackAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAgent")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl CallbackAgent {
    /// Create a new agent with the given role and executor.
    pub fn new<F>(role: impl Into<String>, executor: F) -> Self
    where
        F: Fn(&Task, Option<&str>) -> Result<String, ExecutionError> + Send + Sync + 'static,
    {
        Self {
            role: role.into(),
            executor: Arc::new(executor),
        }
    }
}

impl BaseAgent for CallbackAgent {
    fn role(&self) -> &str {
        &self.role
    }

    fn execute_task(&self, task: &Task, context: Option<&str>) -> Result<String, ExecutionError> {
        (self.executor)(task, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executes_callback() {
        let agent = CallbackAgent::new("Writer", |task, ctx| {
            Ok(format!("{} / {}", task.description, ctx.unwrap_or("-")))
        });

        let task = Task::new("draft Y", "a draft");
        assert_eq!(agent.execute_task(&task, Some("ctx")).unwrap(), "draft Y / ctx");
        assert_eq!(agent.execute_task(&task, None).unwrap(), "draft Y / -");
        assert_eq!(agent.role(), "Writer");
    }

    #[test]
    fn test_clones_share_the_executor() {
        let agent = CallbackAgent::new("Writer", |task, _| Ok(task.description.clone()));
        let copy = agent.clone();
        assert!(Arc::ptr_eq(&agent.executor, &copy.executor));
    }

    #[test]
    fn test_debug_omits_executor() {
        let agent = CallbackAgent::new("Writer", |_, _| Ok(String::new()));
        let debug = format!("{:?}", agent);
        assert_eq!(debug, "CallbackAgent { role: \"Writer\", .. }");
    }
}

//! Task value handed to a co-worker agent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a task to be executed by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: Uuid,
    /// Descriptive text detailing the task's purpose and execution.
    pub description: String,
    /// Clear definition of expected task outcome.
    pub expected_output: String,
    /// Role of the agent responsible for execution.
    pub agent: Option<String>,
}

impl Task {
    /// Create a new Task with required fields.
    pub fn new(description: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            expected_output: expected_output.into(),
            agent: None,
        }
    }

    /// Assign the task to the agent with the given role.
    pub fn with_agent(mut self, role: impl Into<String>) -> Self {
        self.agent = Some(role.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task() {
        let task = Task::new("find X", "a list").with_agent("Researcher");
        assert_eq!(task.description, "find X");
        assert_eq!(task.expected_output, "a list");
        assert_eq!(task.agent.as_deref(), Some("Researcher"));
    }

    #[test]
    fn test_each_task_gets_its_own_id() {
        assert_ne!(Task::new("d", "e").id, Task::new("d", "e").id);
    }

    #[test]
    fn test_serializes_for_agent_executors() {
        let task = Task::new("find X", "a list");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["description"], "find X");
        assert!(value["agent"].is_null());
        let back: Task = serde_json::from_value(value).unwrap();
        assert_eq!(back, task);
    }
}

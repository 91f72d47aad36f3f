//! Tools system for agents.

pub mod agent_tools;
pub mod base_tool;

// Re-exports for convenience
pub use agent_tools::{AgentTools, AskQuestionTool, DelegateWorkTool, Delegator};
pub use base_tool::{BaseTool, ToolSpec};

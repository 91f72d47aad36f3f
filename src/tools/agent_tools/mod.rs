//! Agent tools for delegation and inter-agent communication.
//!
//! Provides the tools that let an agent delegate work to, or ask a question
//! of, a co-worker in the same crew.

pub mod agent_tools;
pub mod ask_question_tool;
pub mod delegate_work_tool;
pub mod delegator;

pub use agent_tools::AgentTools;
pub use ask_question_tool::{AskQuestionTool, AskQuestionToolSchema, ASK_QUESTION_TOOL_NAME};
pub use delegate_work_tool::{DelegateWorkTool, DelegateWorkToolSchema, DELEGATE_WORK_TOOL_NAME};
pub use delegator::{Delegator, DEFAULT_EXPECTED_OUTPUT};

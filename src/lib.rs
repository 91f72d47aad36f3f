//! # crewai-delegation
//!
//! Agent-to-agent delegation for crewAI-style crews.
//!
//! An agent hands a sub-task or a question to a named co-worker through the
//! "Delegate work to coworker" and "Ask question to coworker" tools. The
//! co-worker is resolved from a fixed roster by its role (case, whitespace and
//! quotes are ignored) and its answer comes back as the tool result.

pub mod agents;
pub mod task;
pub mod tools;
pub mod utilities;

pub use agents::{BaseAgent, CallbackAgent};
pub use task::Task;
pub use tools::{AgentTools, AskQuestionTool, BaseTool, DelegateWorkTool, Delegator, ToolSpec};
pub use utilities::config::DelegationConfig;
pub use utilities::errors::{DelegationError, ExecutionError, I18nError, ResolutionError};
pub use utilities::i18n::I18N;
pub use utilities::logger::{LogSink, Logger};

/// Library version, tracking crewai 1.9.3.
pub const VERSION: &str = "1.9.3";

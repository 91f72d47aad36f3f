//! Agent contracts used by the delegation tools.

pub mod base_agent;
pub mod callback_agent;

pub use base_agent::BaseAgent;
pub use callback_agent::{AgentExecutorFn, CallbackAgent};

//! Error types for the delegation tools.

use thiserror::Error;

/// Error type returned across agent and tool boundaries.
pub type ExecutionError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while loading or rendering localized prompts.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The custom prompt file could not be read.
    #[error("Prompt file '{path}' not found.")]
    PromptFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The prompt file is not a valid `kind -> key -> template` JSON document.
    #[error("Error decoding JSON from prompts file '{path}'.")]
    PromptFileDecode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No template is registered under the given kind and key.
    #[error("Prompt for '{kind}':'{key}' not found.")]
    MissingPrompt { kind: String, key: String },

    /// A template placeholder has no value in the supplied inputs.
    #[error("Template variable '{name}' not found in inputs dictionary")]
    MissingVariable { name: String },
}

/// Faults raised while matching a co-worker name against the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The requested name is empty once quotes and whitespace are removed.
    #[error("co-worker name is empty after normalization")]
    EmptyCoworker,
}

/// Errors surfaced by a delegation call.
///
/// An unknown co-worker is not an error: it produces a guidance message the
/// calling agent can act on.
#[derive(Debug, Error)]
pub enum DelegationError {
    /// A prompt template needed to build the response is missing or invalid.
    #[error(transparent)]
    Translation(#[from] I18nError),

    /// The matched co-worker failed while executing the task.
    #[error(transparent)]
    Execution(ExecutionError),
}

impl DelegationError {
    /// Convert into the boxed error used at the tool boundary.
    ///
    /// Execution failures are handed back exactly as the co-worker raised them.
    pub fn into_execution_error(self) -> ExecutionError {
        match self {
            DelegationError::Execution(err) => err,
            other => Box::new(other),
        }
    }
}

/// Error raised when a tool call carries arguments that do not match its schema.
#[derive(Debug, Error)]
#[error("Invalid arguments for tool '{tool}': {source}")]
pub struct ToolArgumentError {
    pub tool: String,
    #[source]
    pub source: serde_json::Error,
}

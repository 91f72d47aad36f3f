//! Co-worker resolution and task dispatch shared by the delegation tools.

use std::collections::HashMap;
use std::sync::Arc;

use log::Level;

use crate::agents::BaseAgent;
use crate::task::Task;
use crate::utilities::errors::{DelegationError, I18nError, ResolutionError};
use crate::utilities::i18n::I18N;
use crate::utilities::logger::{LogSink, Logger};
use crate::utilities::string_utils::{
    case_fold, interpolate_only, normalize_coworker_name, normalize_role,
};

/// Expected output attached to every delegated task.
pub const DEFAULT_EXPECTED_OUTPUT: &str =
    "Your best answer to your co-worker asking you this, accounting for the context shared.";

/// Error template returned when a co-worker name does not match the roster.
pub const UNKNOWN_COWORKER_ERROR: &str = "agent_tool_unexsiting_coworker";

/// Resolves co-worker names against a fixed roster and forwards work to them.
#[derive(Debug)]
pub struct Delegator {
    agents: Vec<Arc<dyn BaseAgent>>,
    i18n: I18N,
    logger: Arc<dyn LogSink>,
}

impl Delegator {
    /// Create a delegator with the embedded English prompts and a quiet `Logger`.
    pub fn new(agents: Vec<Arc<dyn BaseAgent>>) -> Self {
        Self::with_collaborators(agents, I18N::default(), Arc::new(Logger::default()))
    }

    /// Create a delegator with explicit text-lookup and logging collaborators.
    pub fn with_collaborators(
        agents: Vec<Arc<dyn BaseAgent>>,
        i18n: I18N,
        logger: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            agents,
            i18n,
            logger,
        }
    }

    /// The roster, in construction order.
    pub fn agents(&self) -> &[Arc<dyn BaseAgent>] {
        &self.agents
    }

    pub fn i18n(&self) -> &I18N {
        &self.i18n
    }

    /// Case-folded, trimmed role of every roster entry, in roster order.
    pub fn coworker_roles(&self) -> Vec<String> {
        self.agents.iter().map(|agent| normalize_role(agent.role())).collect()
    }

    /// Delegate `task` to the named co-worker.
    pub fn delegate_work(
        &self,
        coworker: &str,
        task: &str,
        context: &str,
    ) -> Result<String, DelegationError> {
        self.execute(coworker, task, context)
    }

    /// Ask the named co-worker a `question`.
    pub fn ask_question(
        &self,
        coworker: &str,
        question: &str,
        context: &str,
    ) -> Result<String, DelegationError> {
        self.execute(coworker, question, context)
    }

    /// Resolve `coworker` and hand it `instruction` along with `context`.
    ///
    /// Unknown names, and names that cannot be resolved at all, produce the
    /// localized guidance message listing the valid co-workers. Errors raised
    /// by the co-worker itself are returned unchanged in
    /// [`DelegationError::Execution`].
    pub fn execute(
        &self,
        coworker: &str,
        instruction: &str,
        context: &str,
    ) -> Result<String, DelegationError> {
        self.logger
            .log(Level::Info, &format!("Searching for co-worker : [{}]", coworker));

        let agent = match self.resolve(coworker) {
            Ok(Some(agent)) => agent,
            Ok(None) => {
                self.logger.log(
                    Level::Error,
                    &format!("Error mentioned agent [{}] could not be found", coworker),
                );
                return Ok(self.unknown_coworker_message()?);
            }
            Err(fault) => {
                self.logger
                    .log(Level::Error, &format!("Error while filtering agents: {}", fault));
                return Ok(self.unknown_coworker_message()?);
            }
        };

        let task = Task::new(instruction, DEFAULT_EXPECTED_OUTPUT).with_agent(agent.role());
        self.logger.log(
            Level::Debug,
            &format!("Delegating task {} to [{}]", task.id, agent.role()),
        );
        agent
            .execute_task(&task, Some(context))
            .map_err(DelegationError::Execution)
    }

    /// Find the first roster entry whose normalized role equals the normalized name.
    ///
    /// Both sides are case-folded, stripped of quotes and trimmed. Roster entries
    /// with a blank role never match and are skipped. Returns `Ok(None)` when
    /// nothing matches, and [`ResolutionError::EmptyCoworker`] when the name is
    /// empty once quotes and whitespace are removed.
    pub fn resolve(
        &self,
        coworker: &str,
    ) -> Result<Option<Arc<dyn BaseAgent>>, ResolutionError> {
        let wanted = normalize_coworker_name(coworker);
        if wanted.is_empty() {
            return Err(ResolutionError::EmptyCoworker);
        }

        for (position, agent) in self.agents.iter().enumerate() {
            let role = normalize_coworker_name(agent.role());
            if role.is_empty() {
                self.logger.log(
                    Level::Warn,
                    &format!("Skipping roster entry #{} with a blank role", position),
                );
                continue;
            }
            if role == wanted {
                return Ok(Some(Arc::clone(agent)));
            }
        }
        Ok(None)
    }

    /// Tool description for `tool_key`, listing the current roster as `[a, b]`.
    pub fn describe(&self, tool_key: &str) -> Result<String, I18nError> {
        let coworkers = format!("[{}]", self.coworker_roles().join(", "));
        render(self.i18n.tools(tool_key)?, coworkers)
    }

    /// Guidance returned for an unknown co-worker: one `- role` line per entry.
    ///
    /// Roles are case-folded but not trimmed here, unlike [`Delegator::describe`].
    pub fn unknown_coworker_message(&self) -> Result<String, I18nError> {
        let coworkers = self
            .agents
            .iter()
            .map(|agent| format!("- {}", case_fold(agent.role())))
            .collect::<Vec<_>>()
            .join("\n");
        render(self.i18n.errors(UNKNOWN_COWORKER_ERROR)?, coworkers)
    }
}

fn render(template: &str, coworkers: String) -> Result<String, I18nError> {
    let mut inputs = HashMap::new();
    inputs.insert("coworkers", coworkers);
    interpolate_only(template, &inputs)
}

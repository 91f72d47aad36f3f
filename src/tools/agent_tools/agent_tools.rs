//! Agent tools manager.
//!
//! Provides the `AgentTools` struct which creates delegation and question
//! tools for a set of agents.

use std::sync::Arc;

use super::ask_question_tool::AskQuestionTool;
use super::delegate_work_tool::DelegateWorkTool;
use super::delegator::Delegator;
use crate::agents::BaseAgent;
use crate::tools::base_tool::BaseTool;
use crate::utilities::config::DelegationConfig;
use crate::utilities::errors::I18nError;
use crate::utilities::i18n::I18N;
use crate::utilities::logger::LogSink;

/// i18n key of the delegate work description template.
const DELEGATE_WORK_KEY: &str = "delegate_work";
/// i18n key of the ask question description template.
const ASK_QUESTION_KEY: &str = "ask_question";

/// Manager for the default tools around agent delegation.
///
/// Creates delegation and question tools that enable inter-agent communication
/// within a crew. Both tools share one [`Delegator`].
#[derive(Debug, Clone)]
pub struct AgentTools {
    delegator: Arc<Delegator>,
}

impl AgentTools {
    /// Create a new `AgentTools` for the given crew members.
    pub fn new(agents: Vec<Arc<dyn BaseAgent>>) -> Self {
        Self::from_delegator(Arc::new(Delegator::new(agents)))
    }

    /// Create with explicit text-lookup and logging collaborators.
    pub fn with_collaborators(
        agents: Vec<Arc<dyn BaseAgent>>,
        i18n: I18N,
        logger: Arc<dyn LogSink>,
    ) -> Self {
        Self::from_delegator(Arc::new(Delegator::with_collaborators(agents, i18n, logger)))
    }

    /// Create from a [`DelegationConfig`], loading its prompt file if one is set.
    pub fn from_config(
        agents: Vec<Arc<dyn BaseAgent>>,
        config: &DelegationConfig,
    ) -> Result<Self, I18nError> {
        Ok(Self::with_collaborators(
            agents,
            config.load_i18n()?,
            Arc::new(config.logger()),
        ))
    }

    pub fn from_delegator(delegator: Arc<Delegator>) -> Self {
        Self { delegator }
    }

    /// The delegator shared by the generated tools.
    pub fn delegator(&self) -> &Arc<Delegator> {
        &self.delegator
    }

    /// Build the delegate work tool with a freshly rendered description.
    pub fn delegate_work_tool(&self) -> Result<DelegateWorkTool, I18nError> {
        Ok(DelegateWorkTool::new(
            self.delegator.describe(DELEGATE_WORK_KEY)?,
            Arc::clone(&self.delegator),
        ))
    }

    /// Build the ask question tool with a freshly rendered description.
    pub fn ask_question_tool(&self) -> Result<AskQuestionTool, I18nError> {
        Ok(AskQuestionTool::new(
            self.delegator.describe(ASK_QUESTION_KEY)?,
            Arc::clone(&self.delegator),
        ))
    }

    /// Get all available agent tools (delegation + question tools).
    ///
    /// Descriptions are rendered on every call from the delegator's roster.
    pub fn tools(&self) -> Result<Vec<Box<dyn BaseTool>>, I18nError> {
        let delegate_work: Box<dyn BaseTool> = Box::new(self.delegate_work_tool()?);
        let ask_question: Box<dyn BaseTool> = Box::new(self.ask_question_tool()?);
        Ok(vec![delegate_work, ask_question])
    }
}

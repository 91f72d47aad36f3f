//! Configuration for the delegation tools.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::I18nError;
use super::i18n::I18N;
use super::logger::Logger;

/// Environment variable naming a custom prompt file.
pub const PROMPT_FILE_ENV: &str = "CREWAI_PROMPT_FILE";
/// Environment variable enabling verbose console logging.
pub const VERBOSE_ENV: &str = "CREWAI_VERBOSE";

/// Settings for the collaborators the delegation tools are built with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationConfig {
    /// Custom prompt file; the embedded English prompts are used when unset.
    pub prompt_file: Option<PathBuf>,
    /// Echo delegation log lines to the console.
    pub verbose: bool,
}

impl DelegationConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            prompt_file: lookup(PROMPT_FILE_ENV)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            verbose: lookup(VERBOSE_ENV).is_some_and(|value| parse_flag(&value)),
        }
    }

    /// Load the i18n collaborator described by this configuration.
    pub fn load_i18n(&self) -> Result<I18N, I18nError> {
        I18N::new(self.prompt_file.clone())
    }

    /// Build the default logger described by this configuration.
    pub fn logger(&self) -> Logger {
        Logger::new(self.verbose)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

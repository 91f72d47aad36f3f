//! Internationalization support for tool descriptions and error messages.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::I18nError;

/// Embedded English translations JSON (used when no custom file is provided).
const EMBEDDED_EN_JSON: &str = include_str!("../translations/en.json");

type PromptTable = HashMap<String, HashMap<String, String>>;

/// Handles loading and retrieving internationalized prompts.
///
/// Prompts are stored in a nested map: `kind -> key -> template`. Each
/// instance owns its table; nothing is shared between instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18N {
    /// The loaded prompts, keyed by `kind` then by `key`.
    #[serde(skip)]
    prompts: PromptTable,
    /// Optional path to a custom JSON file containing prompts.
    pub prompt_file: Option<PathBuf>,
}

impl Default for I18N {
    fn default() -> Self {
        Self::embedded()
    }
}

impl I18N {
    /// Load prompts from `prompt_file`, or the embedded `en.json` when `None`.
    pub fn new(prompt_file: Option<PathBuf>) -> Result<Self, I18nError> {
        match prompt_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::embedded()),
        }
    }

    /// The embedded English prompts.
    pub fn embedded() -> Self {
        let prompts = serde_json::from_str(EMBEDDED_EN_JSON)
            .expect("Error decoding embedded en.json translations.");
        Self {
            prompts,
            prompt_file: None,
        }
    }

    /// Load prompts from a custom JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| I18nError::PromptFileRead {
            path: display.clone(),
            source,
        })?;
        let prompts = serde_json::from_str(&content)
            .map_err(|source| I18nError::PromptFileDecode { path: display, source })?;
        Ok(Self {
            prompts,
            prompt_file: Some(path.to_path_buf()),
        })
    }

    /// Retrieve an error message template by key.
    pub fn errors(&self, error: &str) -> Result<&str, I18nError> {
        self.retrieve("errors", error)
    }

    /// Retrieve a tool description template by key.
    pub fn tools(&self, tool: &str) -> Result<&str, I18nError> {
        self.retrieve("tools", tool)
    }

    /// Retrieve a prompt by `kind` and `key`.
    pub fn retrieve(&self, kind: &str, key: &str) -> Result<&str, I18nError> {
        self.prompts
            .get(kind)
            .and_then(|section| section.get(key))
            .map(String::as_str)
            .ok_or_else(|| I18nError::MissingPrompt {
                kind: kind.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_embedded_prompts_cover_agent_tools() {
        let i18n = I18N::default();
        assert!(i18n.tools("delegate_work").unwrap().contains("{coworkers}"));
        assert!(i18n.tools("ask_question").unwrap().contains("{coworkers}"));
        assert!(i18n
            .errors("agent_tool_unexsiting_coworker")
            .unwrap()
            .contains("{coworkers}"));
        assert!(i18n.prompt_file.is_none());
    }

    #[test]
    fn test_missing_prompt() {
        let err = I18N::default().retrieve("tools", "does_not_exist").unwrap_err();
        assert_eq!(err.to_string(), "Prompt for 'tools':'does_not_exist' not found.");
    }

    #[test]
    fn test_custom_prompt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tools": {{"delegate_work": "Delega a: {{coworkers}}"}}, "errors": {{}}}}"#
        )
        .unwrap();

        let i18n = I18N::new(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(i18n.tools("delegate_work").unwrap(), "Delega a: {coworkers}");
        assert!(i18n.tools("ask_question").is_err());
        assert_eq!(i18n.prompt_file.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_prompt_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = I18N::new(Some(dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, I18nError::PromptFileRead { .. }));
    }

    #[test]
    fn test_malformed_prompt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = I18N::from_file(file.path()).unwrap_err();
        assert!(matches!(err, I18nError::PromptFileDecode { .. }));
    }
}

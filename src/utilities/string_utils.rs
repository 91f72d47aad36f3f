//! String utility functions.

use std::collections::HashMap;

use caseless::default_case_fold_str;
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::I18nError;

static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_\-]*)\}").unwrap());
static QUOTE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]+"#).unwrap());

/// Full Unicode case folding, so `Straße` and `STRASSE` fold to the same text.
pub fn case_fold(text: &str) -> String {
    default_case_fold_str(text)
}

/// Normalize a co-worker name for comparison.
///
/// Case-folds, drops every single and double quote, then trims surrounding
/// whitespace, so `"  \"Senior Writer\" "` becomes `senior writer`. Roster
/// roles go through the same function before they are compared.
pub fn normalize_coworker_name(name: &str) -> String {
    let folded = case_fold(name);
    QUOTE_PATTERN.replace_all(&folded, "").trim().to_string()
}

/// Normalize an agent role for listing in tool descriptions.
///
/// Case-folds and trims. Quotes inside the role are kept.
pub fn normalize_role(role: &str) -> String {
    case_fold(role).trim().to_string()
}

/// Interpolate `{key}` placeholders in a template while leaving other braces alone.
///
/// Only placeholders whose name starts with a letter or underscore and contains
/// alphanumerics, underscores or hyphens are considered. Substitution happens in
/// a single pass, so values containing braces are inserted literally.
///
/// # Errors
/// Returns [`I18nError::MissingVariable`] for the first placeholder that has no
/// entry in `inputs`.
pub fn interpolate_only(
    template: &str,
    inputs: &HashMap<&str, String>,
) -> Result<String, I18nError> {
    if !template.contains('{') {
        return Ok(template.to_string());
    }

    if let Some(missing) = VARIABLE_PATTERN
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .find(|name| !inputs.contains_key(name.as_str()))
    {
        return Err(I18nError::MissingVariable { name: missing });
    }

    let rendered = VARIABLE_PATTERN.replace_all(template, |caps: &regex::Captures<'_>| {
        inputs.get(&caps[1]).cloned().unwrap_or_default()
    });
    Ok(rendered.into_owned())
}

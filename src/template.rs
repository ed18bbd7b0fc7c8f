//! Prompt template rendering.
//!
//! Prompt templates reference variables as `{{name}}`. Whitespace inside the
//! braces is ignored, so `{{ input_text }}` works too. Single braces are
//! plain text, which keeps JSON snippets in prompts intact.
//!
//! Rendering fails on an undefined variable rather than substituting an
//! empty string.

use std::collections::HashMap;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Error type for template rendering failures. Positions are byte offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error(
        "undefined variable '{name}' at position {position} in template\n\
         Fix: pass it with --uv-{name}=VALUE or remove it from the prompt."
    )]
    UndefinedVariable { name: String, position: usize },

    #[error("unmatched '{{{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    #[error("empty variable name '{{{{}}}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Render a template string by substituting variables.
///
/// # Returns
///
/// * `Ok(String)` - The rendered string with all variables substituted
/// * `Err(TemplateError)` - If a variable is undefined or syntax is invalid
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use breakdown::template::render;
///
/// let mut vars = HashMap::new();
/// vars.insert("input_text".to_string(), "Ship the login page".to_string());
///
/// let result = render("Plan: {{ input_text }} {json: true}", &vars).unwrap();
/// assert_eq!(result, "Plan: Ship the login page {json: true}");
/// ```
pub fn render(template: &str, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        let position = offset + start;
        result.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            return Err(TemplateError::UnmatchedBrace { position });
        };

        let name = after_open[..end].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyVariableName { position });
        }

        match variables.get(name) {
            Some(value) => result.push_str(value),
            None => {
                return Err(TemplateError::UndefinedVariable {
                    name: name.to_string(),
                    position,
                });
            }
        }

        let consumed = start + OPEN.len() + end + CLOSE.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    result.push_str(rest);
    Ok(result)
}

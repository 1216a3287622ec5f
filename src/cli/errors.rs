//! Diagnostics for CLI command failures
//!
//! Core errors are wrapped with a help line listing the accepted spellings, then rendered by `miette` at the
//! CLI boundary (see `CliError::from`).

use miette::Diagnostic;
use thiserror::Error;
use typekey_core::TypeKeyError;
use typekey_core::category::PARAM_CATEGORIES;
use typekey_core::tags::VALUE_TAGS;

use super::ExitCode;

/// Errors raised by command implementations
#[derive(Debug, Error, Diagnostic)]
pub enum CommandError {
    #[error("{error}")]
    #[diagnostic(code(typekey::input))]
    Input {
        error: TypeKeyError,
        #[help]
        help: Option<String>,
    },

    #[error("failed to write output: {0}")]
    #[diagnostic(code(typekey::io))]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON output: {0}")]
    #[diagnostic(code(typekey::json))]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CommandError::Input { .. } => ExitCode::USAGE,
            CommandError::Io(_) | CommandError::Json(_) => ExitCode::FAILURE,
        }
    }
}

impl From<TypeKeyError> for CommandError {
    fn from(error: TypeKeyError) -> Self {
        let help = match &error {
            TypeKeyError::UnknownCategory(_) => Some(format!(
                "known categories: {}",
                PARAM_CATEGORIES.iter().map(|c| c.canonical).collect::<Vec<_>>().join(", ")
            )),
            TypeKeyError::UnknownTag(_) => Some(format!(
                "use a raw integer or one of: {}",
                VALUE_TAGS.iter().map(|(_, name)| *name).collect::<Vec<_>>().join(", ")
            )),
            TypeKeyError::SeedAlreadyInitialized { .. } => {
                Some("set TYPEKEY_HASH_SEED or pass --seed only once per process".to_string())
            }
            TypeKeyError::EmptySubject => None,
        };
        CommandError::Input { error, help }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn unknown_category_lists_known_spellings() {
        let err = CommandError::from(TypeKeyError::UnknownCategory("blob".into()));
        assert_eq!(err.to_string(), "unknown parameter category `blob`");
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert_eq!(help, "known categories: numeric, boolean, text, object, pointer, permissive");
        assert_eq!(err.exit_code(), ExitCode::USAGE);
    }

    #[test]
    fn unknown_tag_mentions_raw_integers() {
        let err = CommandError::from(TypeKeyError::UnknownTag("strng".into()));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.starts_with("use a raw integer or one of: none, nil, boolean"));
    }

    #[test]
    fn io_failures_are_plain_failures() {
        let err = CommandError::from(std::io::Error::other("pipe closed"));
        assert_eq!(err.exit_code(), ExitCode::FAILURE);
        assert_eq!(err.to_string(), "failed to write output: pipe closed");
    }
}

//! Runtime error taxonomy shared by the core, the reflection crate and the CLI.
//!
//! Nothing in the naming mechanism fails at runtime: a missing name is a build error and a tag mismatch is a
//! plain `false`. These variants cover the few fallible runtime entry points (seed configuration and parsing
//! user-supplied spellings).

use thiserror::Error;

/// Errors produced by fallible runtime helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeKeyError {
    /// The identifier hash seed was already fixed to a different value.
    #[error("hash seed already initialized to {current:#010x}; refusing to change it to {requested:#010x}")]
    SeedAlreadyInitialized { current: u32, requested: u32 },

    /// A category spelling did not match any compatibility category.
    #[error("unknown parameter category `{0}`")]
    UnknownCategory(String),

    /// A value-tag spelling was neither a known tag name nor an integer.
    #[error("unknown value tag `{0}`")]
    UnknownTag(String),

    /// `split` was asked to split an empty subject.
    #[error("cannot split an empty subject")]
    EmptySubject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_error_message_shows_both_values() {
        let err = TypeKeyError::SeedAlreadyInitialized {
            current: 0x10,
            requested: 0x20,
        };
        assert_eq!(
            err.to_string(),
            "hash seed already initialized to 0x00000010; refusing to change it to 0x00000020"
        );
    }

    #[test]
    fn unknown_spellings_are_quoted() {
        assert_eq!(
            TypeKeyError::UnknownCategory("blob".into()).to_string(),
            "unknown parameter category `blob`"
        );
        assert_eq!(TypeKeyError::UnknownTag("strng".into()).to_string(), "unknown value tag `strng`");
    }
}

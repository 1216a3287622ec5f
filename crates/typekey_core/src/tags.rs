//! Dynamic value tags supplied by the scripting runtime.
//!
//! A [`ValueTag`] classifies a runtime value's kind. The runtime owns the numbering; this crate only compares
//! tags, so any raw `i32` is representable. The named constants follow the Lua 5.x layout.
//!
//! ## Examples
//! ```rust
//! use typekey_core::tags::{self, ValueTag};
//!
//! assert_eq!(ValueTag::from(3), ValueTag::NUMBER);
//! assert_eq!(tags::from_str("userdata"), Some(ValueTag::USERDATA));
//! assert_eq!(tags::as_str(ValueTag::from_raw(42)), None);
//! ```

use std::fmt;

use crate::errors::TypeKeyError;

/// Opaque dynamic value-kind tag.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueTag(pub i32);

impl ValueTag {
    /// No value at all (an absent argument slot).
    pub const NONE: Self = Self(-1);
    pub const NIL: Self = Self(0);
    pub const BOOLEAN: Self = Self(1);
    /// A bare native pointer without metatable.
    pub const LIGHTUSERDATA: Self = Self(2);
    pub const NUMBER: Self = Self(3);
    pub const STRING: Self = Self(4);
    pub const TABLE: Self = Self(5);
    pub const FUNCTION: Self = Self(6);
    /// A handle to a native object.
    pub const USERDATA: Self = Self(7);
    pub const THREAD: Self = Self(8);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check whether the tag denotes "no usable value" (`NIL` or `NONE`).
    #[inline]
    pub const fn is_absent(self) -> bool {
        self.0 == Self::NIL.0 || self.0 == Self::NONE.0
    }
}

impl From<i32> for ValueTag {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match as_str(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "tag({})", self.0),
        }
    }
}

/// Registry of the well-known tags and their spellings.
pub const VALUE_TAGS: &[(ValueTag, &str)] = &[
    (ValueTag::NONE, "none"),
    (ValueTag::NIL, "nil"),
    (ValueTag::BOOLEAN, "boolean"),
    (ValueTag::LIGHTUSERDATA, "lightuserdata"),
    (ValueTag::NUMBER, "number"),
    (ValueTag::STRING, "string"),
    (ValueTag::TABLE, "table"),
    (ValueTag::FUNCTION, "function"),
    (ValueTag::USERDATA, "userdata"),
    (ValueTag::THREAD, "thread"),
];

/// Resolve a tag spelling.
///
/// ## Notes
/// - Matching is **case-insensitive** (`"Number"` and `"NUMBER"` both resolve).
pub fn from_str(name: &str) -> Option<ValueTag> {
    VALUE_TAGS
        .iter()
        .find(|(_, spelling)| spelling.eq_ignore_ascii_case(name))
        .map(|(tag, _)| *tag)
}

/// Return the spelling of a well-known tag, or `None` for runtime-specific values.
pub fn as_str(tag: ValueTag) -> Option<&'static str> {
    VALUE_TAGS.iter().find(|(t, _)| *t == tag).map(|(_, spelling)| *spelling)
}

/// Parse user input as a tag: a well-known spelling or a raw integer.
pub fn parse(input: &str) -> Result<ValueTag, TypeKeyError> {
    let input = input.trim();
    from_str(input)
        .or_else(|| input.parse::<i32>().ok().map(ValueTag::from_raw))
        .ok_or_else(|| TypeKeyError::UnknownTag(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_tags() {
        assert!(ValueTag::NIL.is_absent());
        assert!(ValueTag::NONE.is_absent());
        assert!(!ValueTag::NUMBER.is_absent());
        assert!(!ValueTag::from_raw(99).is_absent());
    }

    #[test]
    fn spellings_resolve_both_ways() {
        for (tag, spelling) in VALUE_TAGS {
            assert_eq!(from_str(spelling), Some(*tag), "tag spelling not resolvable: {spelling}");
            assert_eq!(as_str(*tag), Some(*spelling));
        }
        assert_eq!(from_str("STRING"), Some(ValueTag::STRING));
        assert_eq!(from_str("str"), None);
    }

    #[test]
    fn display_falls_back_to_raw_value() {
        assert_eq!(ValueTag::FUNCTION.to_string(), "function");
        assert_eq!(ValueTag::from_raw(42).to_string(), "tag(42)");
    }

    #[test]
    fn parse_accepts_names_and_raw_values() {
        assert_eq!(parse("Number"), Ok(ValueTag::NUMBER));
        assert_eq!(parse(" 7 "), Ok(ValueTag::USERDATA));
        assert_eq!(parse("-1"), Ok(ValueTag::NONE));
        assert_eq!(parse("1234"), Ok(ValueTag::from_raw(1234)));
        assert_eq!(parse("strng"), Err(TypeKeyError::UnknownTag("strng".into())));
    }
}

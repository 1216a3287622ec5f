//! The ordered compatibility rule set between static parameter types and dynamic value tags.
//!
//! Every static type belongs to exactly one [`ParamCategory`], chosen at compile time by the naming table in
//! `typekey_reflect`. At call time the check is a single comparison against the argument's [`ValueTag`].
//!
//! ## Notes
//! - Categories are listed in priority order. A type that could plausibly fit two (an enum is also a
//!   "struct-like" value) is assigned the earlier one.
//! - [`ParamCategory::Permissive`] is the fallback: any tag except `NIL`/`NONE` passes. It lets aggregates the
//!   table does not classify reach the marshaling layer, which does the real extraction check.
//!
//! ## Examples
//! ```rust
//! use typekey_core::{ParamCategory, ValueTag};
//!
//! assert!(ParamCategory::Numeric.accepts(ValueTag::NUMBER));
//! assert!(!ParamCategory::Numeric.accepts(ValueTag::STRING));
//! assert!(ParamCategory::Permissive.accepts(ValueTag::TABLE));
//! assert!(!ParamCategory::Permissive.accepts(ValueTag::NIL));
//! ```

use std::fmt;

use crate::errors::TypeKeyError;
use crate::tags::ValueTag;

/// Compatibility category of a static parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamCategory {
    /// Integers of any width, floating point, enumerations.
    Numeric,
    Boolean,
    /// Raw C strings, text buffers, rich text.
    Text,
    /// A polymorphic object handle, or a pointer to one.
    ObjectHandle,
    /// An untyped native pointer.
    UntypedPointer,
    /// Everything else, structs included.
    Permissive,
}

impl ParamCategory {
    /// Decide whether a value with `tag` may bind to a parameter of this category.
    #[inline]
    pub const fn accepts(self, tag: ValueTag) -> bool {
        match self {
            ParamCategory::Numeric => tag.0 == ValueTag::NUMBER.0,
            ParamCategory::Boolean => tag.0 == ValueTag::BOOLEAN.0,
            ParamCategory::Text => tag.0 == ValueTag::STRING.0,
            ParamCategory::ObjectHandle => tag.0 == ValueTag::USERDATA.0,
            ParamCategory::UntypedPointer => tag.0 == ValueTag::USERDATA.0 || tag.0 == ValueTag::LIGHTUSERDATA.0,
            ParamCategory::Permissive => !tag.is_absent(),
        }
    }

    /// The single tag this category expects, when there is exactly one.
    pub const fn expected_tag(self) -> Option<ValueTag> {
        match self {
            ParamCategory::Numeric => Some(ValueTag::NUMBER),
            ParamCategory::Boolean => Some(ValueTag::BOOLEAN),
            ParamCategory::Text => Some(ValueTag::STRING),
            ParamCategory::ObjectHandle => Some(ValueTag::USERDATA),
            ParamCategory::UntypedPointer | ParamCategory::Permissive => None,
        }
    }
}

impl fmt::Display for ParamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a compatibility category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: ParamCategory,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of categories, in priority order.
pub const PARAM_CATEGORIES: &[CategoryInfo] = &[
    info(
        ParamCategory::Numeric,
        "numeric",
        "Integers of any width, floating point and enumerations; accepts `number`.",
    ),
    info(ParamCategory::Boolean, "boolean", "`bool`; accepts `boolean`."),
    info(
        ParamCategory::Text,
        "text",
        "C strings, text buffers and rich text; accepts `string`.",
    ),
    info(
        ParamCategory::ObjectHandle,
        "object",
        "Object handles and pointers to them; accepts `userdata`.",
    ),
    info(
        ParamCategory::UntypedPointer,
        "pointer",
        "Untyped native pointers; accepts `userdata` or `lightuserdata`.",
    ),
    info(
        ParamCategory::Permissive,
        "permissive",
        "Anything else; accepts every tag except `nil` and `none`.",
    ),
];

/// Resolve a category spelling (case-insensitive).
pub fn from_str(name: &str) -> Option<ParamCategory> {
    PARAM_CATEGORIES
        .iter()
        .find(|c| c.canonical.eq_ignore_ascii_case(name))
        .map(|c| c.id)
}

/// Like [`from_str`], but reports the unknown spelling.
pub fn parse(name: &str) -> Result<ParamCategory, TypeKeyError> {
    from_str(name.trim()).ok_or_else(|| TypeKeyError::UnknownCategory(name.trim().to_string()))
}

/// Return the canonical spelling of a category.
pub fn as_str(id: ParamCategory) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry of a category.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ParamCategory) -> &'static CategoryInfo {
    PARAM_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .expect("INVARIANT: every ParamCategory has a registry entry")
}

const fn info(id: ParamCategory, canonical: &'static str, description: &'static str) -> CategoryInfo {
    CategoryInfo {
        id,
        canonical,
        description,
    }
}

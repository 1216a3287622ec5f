//! Argument pre-checks: does a dynamically tagged value fit a statically known parameter type?
//!
//! The category of each type is fixed by its [`TypeName`] impl, so [`matches`] is one comparison at call time.
//! It is a cheap filter in front of the marshaling layer's extraction, not a proof of type safety: aggregates
//! without a specific category accept any present value.

use thiserror::Error;

use crate::{IdentName, ParamCategory, TypeName, ValueTag};

/// Check whether a value tagged `tag` may bind to a parameter of type `T`.
///
/// ## Examples
/// ```rust
/// use typekey_reflect::{ValueTag, matches};
///
/// assert!(matches::<i32>(ValueTag::NUMBER));
/// assert!(!matches::<i32>(ValueTag::STRING));
/// assert!(matches::<&str>(4)); // raw tags are accepted too
/// ```
#[inline]
pub fn matches<T: TypeName + ?Sized>(tag: impl Into<ValueTag>) -> bool {
    T::CATEGORY.accepts(tag.into())
}

/// The compatibility category decided for `T`.
pub const fn category_of<T: TypeName + ?Sized>() -> ParamCategory {
    T::CATEGORY
}

/// A rejected argument, reported to the marshaling layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} ({category}), got {actual}")]
pub struct ArgMismatch {
    pub expected: IdentName,
    pub category: ParamCategory,
    pub actual: ValueTag,
}

/// Like [`matches`], but describes the failure.
pub fn check_arg<T: TypeName + ?Sized>(tag: impl Into<ValueTag>) -> Result<(), ArgMismatch> {
    let tag = tag.into();
    if matches::<T>(tag) {
        return Ok(());
    }
    Err(ArgMismatch {
        expected: T::type_name(),
        category: T::CATEGORY,
        actual: tag,
    })
}

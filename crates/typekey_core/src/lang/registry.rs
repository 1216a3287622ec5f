//! Shareable metadata for `typekey_core::lang` registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy` so registries can live in `const` tables.

/// Shared metadata shape for registry entries.
///
/// Registries that need extra per-item data (e.g. an engine type's group) wrap this struct in their own info
/// type.
///
/// ## Examples
/// ```rust
/// use typekey_core::lang::primitives::{self, PrimitiveId};
///
/// let info = primitives::info_for(PrimitiveId::Int32);
/// assert!(info.spelled("INT32"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
}

impl<Id> KeyInfo<Id> {
    /// Check whether `name` spells this entry (case-insensitive).
    pub fn spelled(&self, name: &str) -> bool {
        self.canonical.eq_ignore_ascii_case(name)
    }
}

pub(crate) const fn key<Id>(id: Id, canonical: &'static str, description: &'static str) -> KeyInfo<Id> {
    KeyInfo {
        id,
        canonical,
        description,
    }
}

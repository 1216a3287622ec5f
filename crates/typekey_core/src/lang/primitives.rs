//! Primitive and root type names.
//!
//! These are the exact-match entries of the naming table: every scalar the binding surface accepts, the text
//! types, the runtime state marker and the single erased name shared by all object handles.
//!
//! ## Examples
//! ```rust
//! use typekey_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::as_str(PrimitiveId::Int32), "int32");
//! assert_eq!(primitives::from_str("UOBJECT"), Some(PrimitiveId::Object));
//! ```

use crate::category::ParamCategory;
use crate::lang::registry::{KeyInfo, key};

/// Stable identifier for primitive/root names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Void,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    Bool,
    Char,
    String,
    Text,
    LuaState,
    /// The erased name every object handle resolves to.
    Object,
}

/// Metadata for a primitive/root name.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub key: KeyInfo<PrimitiveId>,
    /// Compatibility category of the type itself (not of a pointer to it).
    pub category: ParamCategory,
}

/// Registry of primitive/root names.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveId::Void, "void", "No value; also the pointee of untyped pointers.", ParamCategory::Permissive),
    info(PrimitiveId::Int8, "int8", "Signed 8-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::UInt8, "uint8", "Unsigned 8-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::Int16, "int16", "Signed 16-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::UInt16, "uint16", "Unsigned 16-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::Int32, "int32", "Signed 32-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::UInt32, "uint32", "Unsigned 32-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::Int64, "int64", "Signed 64-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::UInt64, "uint64", "Unsigned 64-bit integer.", ParamCategory::Numeric),
    info(PrimitiveId::Float, "float", "32-bit floating point.", ParamCategory::Numeric),
    info(PrimitiveId::Double, "double", "64-bit floating point.", ParamCategory::Numeric),
    info(PrimitiveId::Bool, "bool", "Boolean.", ParamCategory::Boolean),
    info(
        PrimitiveId::Char,
        "char",
        "A single character; a pointer to it is a C string.",
        ParamCategory::Permissive,
    ),
    info(PrimitiveId::String, "FString", "Owned text buffer.", ParamCategory::Text),
    info(PrimitiveId::Text, "FText", "Localizable rich text.", ParamCategory::Text),
    info(
        PrimitiveId::LuaState,
        "lua_State",
        "Opaque scripting runtime state.",
        ParamCategory::Permissive,
    ),
    info(
        PrimitiveId::Object,
        "UObject",
        "Every polymorphic object handle, regardless of concrete class.",
        ParamCategory::ObjectHandle,
    ),
];

/// Resolve a primitive spelling (case-insensitive).
pub fn from_str(name: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.key.spelled(name)).map(|p| p.key.id)
}

/// Return the canonical spelling of a primitive.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry key of a primitive.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static KeyInfo<PrimitiveId> {
    &PRIMITIVES
        .iter()
        .find(|p| p.key.id == id)
        .expect("INVARIANT: every PrimitiveId has a registry entry")
        .key
}

const fn info(
    id: PrimitiveId,
    canonical: &'static str,
    description: &'static str,
    category: ParamCategory,
) -> PrimitiveInfo {
    PrimitiveInfo {
        key: key(id, canonical, description),
        category,
    }
}

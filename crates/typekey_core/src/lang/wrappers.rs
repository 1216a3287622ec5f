//! Generic wrapper templates and key composition.
//!
//! Wrapper keys are composed from the inner keys: `TArray<int32>`, `TMap<FString,UObject>`,
//! `TArray<TSharedPtr<Vector>>`. Arguments are joined with `,` and no spaces.
//!
//! ## Examples
//! ```rust
//! use typekey_core::IdentName;
//! use typekey_core::lang::wrappers::{self, WrapperId};
//!
//! let key = wrappers::compose(WrapperId::Map, &[IdentName::from("int32"), IdentName::from("FString")]);
//! assert_eq!(key.as_str(), "TMap<int32,FString>");
//! ```

use crate::ident::IdentName;
use crate::lang::registry::{KeyInfo, key};

/// Stable identifier for wrapper templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperId {
    /// Shared-ownership smart pointer.
    SharedPtr,
    /// Dynamic array.
    Array,
    /// Key/value map.
    Map,
    Set,
}

/// Metadata for a wrapper template.
#[derive(Debug, Clone, Copy)]
pub struct WrapperInfo {
    pub key: KeyInfo<WrapperId>,
    /// Number of type arguments the template takes.
    pub arity: usize,
}

/// Registry of wrapper templates.
pub const WRAPPERS: &[WrapperInfo] = &[
    info(WrapperId::SharedPtr, "TSharedPtr", "Shared-ownership smart pointer.", 1),
    info(WrapperId::Array, "TArray", "Dynamic array.", 1),
    info(WrapperId::Map, "TMap", "Key/value map.", 2),
    info(WrapperId::Set, "TSet", "Set of unique values.", 1),
];

/// Resolve a wrapper spelling (case-insensitive).
pub fn from_str(name: &str) -> Option<WrapperId> {
    WRAPPERS.iter().find(|w| w.key.spelled(name)).map(|w| w.key.id)
}

/// Return the canonical spelling of a wrapper.
pub fn as_str(id: WrapperId) -> &'static str {
    info_for(id).key.canonical
}

/// Return the registry entry of a wrapper.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: WrapperId) -> &'static WrapperInfo {
    WRAPPERS
        .iter()
        .find(|w| w.key.id == id)
        .expect("INVARIANT: every WrapperId has a registry entry")
}

/// Compose `Wrapper<Arg1,Arg2,...>`.
///
/// ## Parameters
/// - `id`: the wrapper template.
/// - `args`: inner keys, in template order.
///
/// ## Notes
/// - `args.len()` is expected to equal the wrapper's arity; this is checked in debug builds only because the
///   callers are the fixed impls in `typekey_reflect`.
pub fn compose(id: WrapperId, args: &[IdentName]) -> IdentName {
    debug_assert_eq!(args.len(), info_for(id).arity, "wrong number of type arguments for {id:?}");
    let mut out = IdentName::from(as_str(id));
    out.append("<");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.append(",");
        }
        out.append_name(arg);
    }
    out.append(">");
    out
}

const fn info(id: WrapperId, canonical: &'static str, description: &'static str, arity: usize) -> WrapperInfo {
    WrapperInfo {
        key: key(id, canonical, description),
        arity,
    }
}

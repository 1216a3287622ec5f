//! Compile-time type naming and argument-tag checks for scripting bindings.
//!
//! Binding-generation code needs a stable string key for every parameter and return type, and the marshaling
//! layer needs a cheap way to reject an argument whose runtime tag cannot possibly bind. Both are answered
//! here, per static type, at compile time:
//!
//! - [`name_of`] resolves a type through the [`TypeName`] table (`i32` -> `"int32"`,
//!   `Vec<Arc<Vector>>` -> `"TArray<TSharedPtr<Vector>>"`, any object handle -> `"UObject"`);
//! - [`matches`] checks a dynamic [`ValueTag`] against the type's [`ParamCategory`];
//! - [`is_object_handle`] classifies handles and pointers to them;
//! - [`signature_key`] composes return + parameter names into a function-signature key.
//!
//! A type with no table entry does not compile where it is used; there is no runtime fallback name.
//!
//! ## Examples
//! ```rust
//! use std::sync::Arc;
//! use typekey_reflect::prelude::*;
//!
//! #[derive(ObjectHandle)]
//! struct Actor;
//!
//! assert_eq!(name_of::<Vec<Arc<Vector>>>(), "TArray<TSharedPtr<Vector>>");
//! assert_eq!(name_of::<&Actor>(), "UObject");
//! assert!(matches::<i32>(ValueTag::NUMBER));
//! assert!(is_object_handle::<*const Actor>());
//! ```

#![deny(clippy::unwrap_used)]

// Lets the derive macros' `::typekey_reflect::...` paths resolve inside this crate's own tests.
extern crate self as typekey_reflect;

pub mod compat;
pub mod engine;
pub mod handle;
pub mod host;
pub mod signature;
pub mod type_name;

pub use typekey_core::{IdentName, ParamCategory, ValueTag};
pub use typekey_derive::{ObjectHandle, TypeName};

pub use compat::{ArgMismatch, category_of, check_arg, matches};
pub use engine::*;
pub use handle::{HandleShape, Object, ObjectHandle, is_object_handle};
pub use host::{HostObjectModel, LuaState, is_live_handle, resolve_struct};
pub use signature::{TypeNameList, parameter_key, signature_key};
pub use type_name::{CChar, CustomTypeName, LuaLString, Text, TypeName, has_custom_type_name, name_of};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compat::{check_arg, matches};
    pub use crate::engine::*;
    pub use crate::handle::{Object, is_object_handle};
    pub use crate::signature::signature_key;
    pub use crate::type_name::{CustomTypeName, Text, name_of};
    pub use crate::{IdentName, ObjectHandle, ParamCategory, TypeName, ValueTag};
    pub use crate::{impl_type_name, object_handle};
}

//! Object handles: references into the host's garbage-collected object graph.
//!
//! Every handle type binds under one erased name, `"UObject"`, so signatures never leak a concrete class. A
//! handle is declared with `#[derive(ObjectHandle)]` (or [`object_handle!`] for foreign types); there is no
//! blanket impl, which keeps each handle's naming entry unambiguous next to the wrapper and qualifier impls.
//!
//! [`is_object_handle`] strips exactly one reference or pointer level: `&Actor` and `*mut Actor` are handles,
//! `&&Actor` is not.

use typekey_core::lang::primitives::{self, PrimitiveId};

use crate::TypeName;

/// How a type relates to object handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleShape {
    NotHandle,
    /// The type is a handle.
    Direct,
    /// One reference or pointer level over a handle.
    Pointer,
}

impl HandleShape {
    /// Shape of a reference or pointer to a type of this shape.
    pub const fn through_pointer(self) -> Self {
        match self {
            HandleShape::Direct => HandleShape::Pointer,
            HandleShape::NotHandle | HandleShape::Pointer => HandleShape::NotHandle,
        }
    }

    pub const fn is_handle(self) -> bool {
        !matches!(self, HandleShape::NotHandle)
    }
}

/// Marker for object-handle types.
///
/// Implementors also carry a `TypeName` impl produced by [`object_handle_type_name!`]; the derive and
/// [`object_handle!`] emit both.
pub trait ObjectHandle: TypeName {}

/// The root of the host object hierarchy.
///
/// Only ever seen behind a reference or pointer.
#[repr(C)]
pub struct Object {
    _private: [u8; 0],
}

impl ObjectHandle for Object {}
crate::object_handle_type_name!(Object);

/// The erased name every object handle binds under.
pub fn erased_name() -> &'static str {
    primitives::as_str(PrimitiveId::Object)
}

/// Check whether `T` is an object handle or a single reference/pointer to one.
///
/// ## Examples
/// ```rust
/// use typekey_reflect::{Object, is_object_handle};
///
/// assert!(is_object_handle::<*mut Object>());
/// assert!(!is_object_handle::<&&Object>());
/// assert!(!is_object_handle::<i32>());
/// ```
pub const fn is_object_handle<T: TypeName + ?Sized>() -> bool {
    T::HANDLE.is_handle()
}

/// Declare a foreign type as an object handle.
///
/// ```rust
/// use typekey_reflect::{name_of, object_handle};
///
/// pub struct World;
/// object_handle!(World);
///
/// assert_eq!(name_of::<&World>(), "UObject");
/// ```
#[macro_export]
macro_rules! object_handle {
    ($ty:ty) => {
        impl $crate::ObjectHandle for $ty {}
        $crate::object_handle_type_name!($ty);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! object_handle_type_name {
    ($ty:ty) => {
        impl $crate::TypeName for $ty {
            const CATEGORY: $crate::ParamCategory = $crate::ParamCategory::ObjectHandle;
            const POINTER_CATEGORY: $crate::ParamCategory = $crate::ParamCategory::ObjectHandle;
            const HANDLE: $crate::HandleShape = $crate::HandleShape::Direct;

            fn type_name() -> $crate::IdentName {
                $crate::IdentName::from($crate::handle::erased_name())
            }
        }
    };
}

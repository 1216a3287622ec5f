//! The two host queries the binding layer consumes, and the runtime state marker.
//!
//! The object model itself (identity, class hierarchy, garbage collection) belongs to the host. This module
//! only states what is asked of it.

use typekey_core::lang::primitives::{self, PrimitiveId};

use crate::{IdentName, TypeName, ValueTag, is_object_handle, matches};

/// Opaque state of the scripting runtime; only ever handled through a pointer.
#[repr(C)]
pub struct LuaState {
    _private: [u8; 0],
}

crate::impl_type_name!(LuaState => primitives::as_str(PrimitiveId::LuaState));

/// Queries answered by the host object system.
pub trait HostObjectModel {
    /// The host's dynamic handle to an object.
    type Handle: ?Sized;
    /// Descriptor of a registered aggregate (struct) type.
    type StructDescriptor;

    /// Check whether `handle` still refers to a live object.
    fn is_live_object(&self, handle: &Self::Handle) -> bool;

    /// Look up an aggregate-type descriptor by binding name.
    fn find_struct(&self, name: &str) -> Option<Self::StructDescriptor>;

    /// Display name of the object behind `handle`, for diagnostics.
    fn object_name(&self, handle: &Self::Handle) -> String;
}

/// Validate a dynamic argument headed for a parameter of type `T`.
///
/// The tag must fit `T`; when `T` is an object handle the host must also report the object alive.
pub fn is_live_handle<T, H>(host: &H, tag: impl Into<ValueTag>, handle: &H::Handle) -> bool
where
    T: TypeName + ?Sized,
    H: HostObjectModel + ?Sized,
{
    if !matches::<T>(tag) {
        return false;
    }
    !is_object_handle::<T>() || host.is_live_object(handle)
}

/// Find the aggregate descriptor the host registered under `T`'s key.
pub fn resolve_struct<T, H>(host: &H) -> Option<H::StructDescriptor>
where
    T: TypeName + ?Sized,
    H: HostObjectModel + ?Sized,
{
    let key: IdentName = T::type_name();
    host.find_struct(key.as_str())
}

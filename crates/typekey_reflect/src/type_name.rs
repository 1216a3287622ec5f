//! The naming table: one `TypeName` impl per bindable type.
//!
//! Resolution is ordinary trait dispatch, so it happens at compile time and is total over whatever compiles.
//! Exactly one impl applies to each concrete type:
//!
//! 1. exact entries for primitives and registered aggregates ([`impl_type_name!`], `#[derive(TypeName)]`);
//! 2. object handles, which all report the erased `"UObject"` name (see [`crate::handle`]);
//! 3. references and raw pointers (`&T`, `&mut T`, `*const T`, `*mut T`), which report `T`'s name;
//! 4. wrappers, which compose `TSharedPtr<T>` (`Arc`, `Rc`), `TArray<T>` (`Vec`, slices), `TMap<K,V>`
//!    (`HashMap`, `BTreeMap`) and `TSet<T>` (`HashSet`, `BTreeSet`);
//! 5. engine value types, each under one hand-chosen name (see [`crate::engine`]).
//!
//! Handles dominate the qualifier and wrapper rules structurally: those rules only ever ask the inner type for
//! its name, and a handle's answer is always the erased one.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ffi::{CStr, c_char, c_void};
use std::rc::Rc;
use std::sync::Arc;

use typekey_core::lang::primitives::{self, PrimitiveId};
use typekey_core::lang::wrappers::{self, WrapperId};

use crate::handle::HandleShape;
use crate::{IdentName, ParamCategory};

/// A type that can appear in a binding signature.
///
/// Implement it with [`impl_type_name!`] or `#[derive(TypeName)]`; generic shapes are registered per concrete
/// instantiation.
pub trait TypeName {
    /// Compatibility category of a value of this type.
    const CATEGORY: ParamCategory = ParamCategory::Permissive;

    /// Compatibility category of a reference or raw pointer to this type.
    ///
    /// Most pointees leave this permissive. Object handles, text types and `c_void` override it.
    const POINTER_CATEGORY: ParamCategory = ParamCategory::Permissive;

    /// Compatibility category of a `*const` pointer to this type.
    ///
    /// Follows [`TypeName::POINTER_CATEGORY`] unless overridden. Only C-string characters set it apart: a
    /// `*const c_char` reads as text, while `&u8` or `*mut c_char` stay permissive.
    const CONST_POINTER_CATEGORY: ParamCategory = Self::POINTER_CATEGORY;

    /// Whether this type is an object handle (or one reference level away from one).
    const HANDLE: HandleShape = HandleShape::NotHandle;

    /// Name supplied through the [`CustomTypeName`] hook, if the type opted in.
    const CUSTOM_NAME: Option<&'static str> = None;

    /// The registry key for this type.
    fn type_name() -> IdentName;
}

/// Resolve the registry key of `T`.
///
/// ## Examples
/// ```rust
/// use std::collections::BTreeMap;
/// use typekey_reflect::name_of;
///
/// assert_eq!(name_of::<u16>(), "uint16");
/// assert_eq!(name_of::<BTreeMap<i32, String>>(), "TMap<int32,FString>");
/// assert_eq!(name_of::<*const f32>(), name_of::<f32>());
/// ```
pub fn name_of<T: TypeName + ?Sized>() -> IdentName {
    T::type_name()
}

/// Customization hook: a type-level name constant.
///
/// `#[derive(TypeName)]` with `#[type_name(custom)]` reads the name from here, so a type can compute or share
/// its binding name with other code.
pub trait CustomTypeName {
    const LUA_TYPENAME: &'static str;
}

/// Check whether `T` takes its name from the [`CustomTypeName`] hook.
///
/// This reports what the `TypeName` impl declares, not whether `T: CustomTypeName` holds: a type that implements
/// the hook but derives `TypeName` without `#[type_name(custom)]` keeps its identifier and probes `false`.
pub const fn has_custom_type_name<T: TypeName + ?Sized>() -> bool {
    T::CUSTOM_NAME.is_some()
}

/// Localizable rich text; binds as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub source: String,
}

impl From<&str> for Text {
    fn from(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

/// A C `char` that keys as `"char"` instead of the `int8`/`uint8` its width implies.
///
/// ```rust
/// use typekey_reflect::{CChar, ParamCategory, TypeName, name_of, signature_key};
///
/// assert_eq!(name_of::<*const CChar>(), "char");
/// assert_eq!(<*const CChar as TypeName>::CATEGORY, ParamCategory::Text);
/// assert_eq!(signature_key::<(), (*const CChar,)>(","), "void,char,");
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CChar(pub c_char);

impl From<c_char> for CChar {
    fn from(c: c_char) -> Self {
        Self(c)
    }
}

/// A length-delimited string that may carry embedded NULs.
///
/// [`IdentName`] cuts a piece at its first NUL; binary payloads bound for the script side travel as this instead.
/// It binds as a plain script string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LuaLString<'a> {
    buf: &'a [u8],
}

impl<'a> LuaLString<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl<'a> From<&'a [u8]> for LuaLString<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl<'a> From<&'a str> for LuaLString<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// Register a concrete type under a fixed name.
///
/// ```rust
/// use typekey_reflect::{impl_type_name, matches, name_of, ValueTag};
///
/// struct Handle(u64);
/// impl_type_name!(Handle => "FHandle", category = Numeric);
///
/// assert_eq!(name_of::<Handle>(), "FHandle");
/// assert!(matches::<Handle>(ValueTag::NUMBER));
/// ```
#[macro_export]
macro_rules! impl_type_name {
    ($ty:ty => $name:expr) => {
        $crate::impl_type_name!($ty => $name, category = Permissive, pointer_category = Permissive);
    };
    ($ty:ty => $name:expr, category = $cat:ident) => {
        $crate::impl_type_name!($ty => $name, category = $cat, pointer_category = Permissive);
    };
    ($ty:ty => $name:expr, category = $cat:ident, pointer_category = $pcat:ident) => {
        $crate::impl_type_name!(
            $ty => $name,
            category = $cat,
            pointer_category = $pcat,
            const_pointer_category = $pcat
        );
    };
    (
        $ty:ty => $name:expr,
        category = $cat:ident,
        pointer_category = $pcat:ident,
        const_pointer_category = $cpcat:ident
    ) => {
        impl $crate::TypeName for $ty {
            const CATEGORY: $crate::ParamCategory = $crate::ParamCategory::$cat;
            const POINTER_CATEGORY: $crate::ParamCategory = $crate::ParamCategory::$pcat;
            const CONST_POINTER_CATEGORY: $crate::ParamCategory = $crate::ParamCategory::$cpcat;

            fn type_name() -> $crate::IdentName {
                $crate::IdentName::from($name)
            }
        }
    };
}

impl_type_name!(() => primitives::as_str(PrimitiveId::Void));
impl_type_name!(c_void => primitives::as_str(PrimitiveId::Void), category = Permissive, pointer_category = UntypedPointer);
// `c_char` is `i8` or `u8` depending on the target; only a `*const` to either reads as a C string.
impl_type_name!(
    i8 => primitives::as_str(PrimitiveId::Int8),
    category = Numeric,
    pointer_category = Permissive,
    const_pointer_category = Text
);
impl_type_name!(
    u8 => primitives::as_str(PrimitiveId::UInt8),
    category = Numeric,
    pointer_category = Permissive,
    const_pointer_category = Text
);
impl_type_name!(i16 => primitives::as_str(PrimitiveId::Int16), category = Numeric);
impl_type_name!(u16 => primitives::as_str(PrimitiveId::UInt16), category = Numeric);
impl_type_name!(i32 => primitives::as_str(PrimitiveId::Int32), category = Numeric);
impl_type_name!(u32 => primitives::as_str(PrimitiveId::UInt32), category = Numeric);
impl_type_name!(i64 => primitives::as_str(PrimitiveId::Int64), category = Numeric);
impl_type_name!(u64 => primitives::as_str(PrimitiveId::UInt64), category = Numeric);
impl_type_name!(f32 => primitives::as_str(PrimitiveId::Float), category = Numeric);
impl_type_name!(f64 => primitives::as_str(PrimitiveId::Double), category = Numeric);
impl_type_name!(bool => primitives::as_str(PrimitiveId::Bool), category = Boolean);
impl_type_name!(char => primitives::as_str(PrimitiveId::Char));
impl_type_name!(CStr => primitives::as_str(PrimitiveId::Char), category = Text, pointer_category = Text);
impl_type_name!(str => primitives::as_str(PrimitiveId::String), category = Text, pointer_category = Text);
impl_type_name!(String => primitives::as_str(PrimitiveId::String), category = Text);
impl_type_name!(Text => primitives::as_str(PrimitiveId::Text), category = Text);
impl_type_name!(
    CChar => primitives::as_str(PrimitiveId::Char),
    category = Numeric,
    pointer_category = Permissive,
    const_pointer_category = Text
);
impl_type_name!(LuaLString<'_> => primitives::as_str(PrimitiveId::String), category = Text, pointer_category = Text);

impl<T: TypeName + ?Sized> TypeName for &T {
    const CATEGORY: ParamCategory = T::POINTER_CATEGORY;
    const HANDLE: HandleShape = T::HANDLE.through_pointer();

    fn type_name() -> IdentName {
        T::type_name()
    }
}

impl<T: TypeName + ?Sized> TypeName for &mut T {
    const CATEGORY: ParamCategory = T::POINTER_CATEGORY;
    const HANDLE: HandleShape = T::HANDLE.through_pointer();

    fn type_name() -> IdentName {
        T::type_name()
    }
}

impl<T: TypeName + ?Sized> TypeName for *const T {
    const CATEGORY: ParamCategory = T::CONST_POINTER_CATEGORY;
    const HANDLE: HandleShape = T::HANDLE.through_pointer();

    fn type_name() -> IdentName {
        T::type_name()
    }
}

impl<T: TypeName + ?Sized> TypeName for *mut T {
    const CATEGORY: ParamCategory = T::POINTER_CATEGORY;
    const HANDLE: HandleShape = T::HANDLE.through_pointer();

    fn type_name() -> IdentName {
        T::type_name()
    }
}

impl<T: TypeName + ?Sized> TypeName for Arc<T> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::SharedPtr, &[T::type_name()])
    }
}

impl<T: TypeName + ?Sized> TypeName for Rc<T> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::SharedPtr, &[T::type_name()])
    }
}

impl<T: TypeName> TypeName for Vec<T> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::Array, &[T::type_name()])
    }
}

impl<T: TypeName> TypeName for [T] {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::Array, &[T::type_name()])
    }
}

impl<K: TypeName, V: TypeName, S> TypeName for HashMap<K, V, S> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::Map, &[K::type_name(), V::type_name()])
    }
}

impl<K: TypeName, V: TypeName> TypeName for BTreeMap<K, V> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::Map, &[K::type_name(), V::type_name()])
    }
}

impl<T: TypeName, S> TypeName for HashSet<T, S> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::Set, &[T::type_name()])
    }
}

impl<T: TypeName> TypeName for BTreeSet<T> {
    fn type_name() -> IdentName {
        wrappers::compose(WrapperId::Set, &[T::type_name()])
    }
}

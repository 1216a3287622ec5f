//! Signature keys: a return type followed by a parameter list, each name followed by a delimiter.
//!
//! `signature_key::<f32, (i32, &str)>(";")` is `"float;int32;FString;"`. The trailing delimiter is part of the
//! key format, so keys built for a `()` parameter list still end in one.

use crate::{IdentName, TypeName};

/// An ordered list of types whose names can be appended to a key.
///
/// Implemented for `()` and for tuples of up to twelve [`TypeName`] types.
pub trait TypeNameList {
    /// Number of types in the list.
    const LEN: usize;

    /// Append each element's name followed by `delimiter`, in order.
    fn append_names(out: &mut IdentName, delimiter: &str);
}

impl TypeNameList for () {
    const LEN: usize = 0;

    fn append_names(_out: &mut IdentName, _delimiter: &str) {}
}

macro_rules! impl_type_name_list {
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: TypeName, $($tail: TypeName),*> TypeNameList for ($head, $($tail,)*) {
            const LEN: usize = 1 + <($($tail,)*) as TypeNameList>::LEN;

            fn append_names(out: &mut IdentName, delimiter: &str) {
                out.append_name(&$head::type_name());
                out.append(delimiter);
                <($($tail,)*) as TypeNameList>::append_names(out, delimiter);
            }
        }

        impl_type_name_list!($($tail),*);
    };
    () => {};
}

impl_type_name_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

/// Compose the key of a function returning `R` and taking `Args`.
///
/// ## Examples
/// ```rust
/// use typekey_reflect::signature_key;
///
/// assert_eq!(signature_key::<bool, (i32, String)>(","), "bool,int32,FString,");
/// assert_eq!(signature_key::<(), ()>(","), "void,");
/// ```
pub fn signature_key<R: TypeName + ?Sized, Args: TypeNameList>(delimiter: &str) -> IdentName {
    let mut out = R::type_name();
    out.append(delimiter);
    Args::append_names(&mut out, delimiter);
    out
}

/// Names of `Args` alone, each followed by `delimiter`.
pub fn parameter_key<Args: TypeNameList>(delimiter: &str) -> IdentName {
    let mut out = IdentName::new();
    Args::append_names(&mut out, delimiter);
    out
}

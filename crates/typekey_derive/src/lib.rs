//! Derive macros for the typekey naming table.
//!
//! These macros generate the boilerplate a type needs to appear in binding signatures:
//! - `TypeName`: registers a struct or enum under its identifier, a `rename`, or its `CustomTypeName` hook
//! - `ObjectHandle`: declares a polymorphic object handle, which binds under the shared erased name
//!
//! Generated code refers to `::typekey_reflect`, so the deriving crate must depend on it.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, LitStr, parse_macro_input};

/// Registers a struct or enum in the naming table.
///
/// Attributes (all optional, under `#[type_name(...)]`):
/// - `rename = "Name"`: bind under `Name` instead of the identifier.
/// - `custom`: take the name from the type's `CustomTypeName::LUA_TYPENAME`.
///
/// Enums are classified as numeric (they cross the boundary as their discriminant); structs are permissive.
///
/// # Example
/// ```ignore
/// #[derive(TypeName)]
/// #[type_name(rename = "WeaponStats")]
/// struct FWeaponStats {
///     damage: f32,
/// }
///
/// // Generates:
/// impl typekey_reflect::TypeName for FWeaponStats {
///     const CATEGORY: ParamCategory = ParamCategory::Permissive;
///     fn type_name() -> IdentName { IdentName::from("WeaponStats") }
/// }
/// ```
#[proc_macro_derive(TypeName, attributes(type_name))]
pub fn derive_type_name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_type_name(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declares a polymorphic object handle.
///
/// Generates the `ObjectHandle` marker and a `TypeName` impl that reports the erased `"UObject"` name and the
/// object-handle category for the type and for pointers to it. The type's own identifier never reaches a
/// signature key.
///
/// # Example
/// ```ignore
/// #[derive(ObjectHandle)]
/// struct Pawn;
///
/// assert_eq!(name_of::<&Pawn>(), "UObject");
/// ```
#[proc_macro_derive(ObjectHandle)]
pub fn derive_object_handle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_object_handle(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

enum NameSource {
    Ident,
    Rename(LitStr),
    Custom,
}

fn expand_type_name(input: &DeriveInput) -> syn::Result<TokenStream2> {
    reject_generics(input, "TypeName")?;
    let name = &input.ident;

    let mut source = NameSource::Ident;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("type_name")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                source = NameSource::Rename(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("custom") {
                source = NameSource::Custom;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `custom`"))
            }
        })?;
    }

    let custom_name = match source {
        NameSource::Custom => quote! {
            const CUSTOM_NAME: ::core::option::Option<&'static str> =
                ::core::option::Option::Some(<Self as ::typekey_reflect::CustomTypeName>::LUA_TYPENAME);
        },
        NameSource::Ident | NameSource::Rename(_) => quote! {},
    };

    let name_expr = match source {
        NameSource::Ident => {
            let lit = LitStr::new(&name.to_string(), name.span());
            quote! { ::typekey_reflect::IdentName::from(#lit) }
        }
        NameSource::Rename(lit) => quote! { ::typekey_reflect::IdentName::from(#lit) },
        NameSource::Custom => quote! {
            ::typekey_reflect::IdentName::from(<Self as ::typekey_reflect::CustomTypeName>::LUA_TYPENAME)
        },
    };

    let category = match &input.data {
        Data::Enum(_) => quote! { ::typekey_reflect::ParamCategory::Numeric },
        Data::Struct(_) | Data::Union(_) => quote! { ::typekey_reflect::ParamCategory::Permissive },
    };

    Ok(quote! {
        impl ::typekey_reflect::TypeName for #name {
            const CATEGORY: ::typekey_reflect::ParamCategory = #category;
            #custom_name

            fn type_name() -> ::typekey_reflect::IdentName {
                #name_expr
            }
        }
    })
}

fn expand_object_handle(input: &DeriveInput) -> syn::Result<TokenStream2> {
    reject_generics(input, "ObjectHandle")?;
    let name = &input.ident;

    Ok(quote! {
        impl ::typekey_reflect::ObjectHandle for #name {}

        ::typekey_reflect::object_handle_type_name!(#name);
    })
}

fn reject_generics(input: &DeriveInput, derive: &str) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &input.generics,
            format!("`{derive}` is registered per concrete type; use `impl_type_name!` for each instantiation"),
        ))
    }
}

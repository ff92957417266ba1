//! Proc-macros for tactile.
//!
//! Currently provided:
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field of a props struct.
//!
//! ## Field control
//! Builder generation is tuned per field with `#[with_builders(...)]`:
//! - `skip`: no builder is generated for the field.
//! - `into`: the builder accepts `impl Into<T>` instead of `T`.
//! - `some`: the field must be an `Option<T>`; the builder accepts `T` and
//!   stores `Some(value)`. Combines with `into`.
//!
//! ### Example
//! ```ignore
//! use tactile_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, Default, WithBuilders)]
//! pub struct LinkProps {
//!     #[with_builders(some, into)]
//!     pub url: Option<String>,
//!     pub disabled: bool,
//!     #[with_builders(skip)]
//!     pub internal: u32,
//! }
//!
//! let props = LinkProps::default()
//!     .with_url("http://example.com")
//!     .with_disabled(true);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, GenericArgument,
    PathArguments, Type,
};

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style) and return `Self`.
///
/// Field attributes:
/// - `#[with_builders(skip)]`: do not generate a builder method for this field.
/// - `#[with_builders(into)]`: accept `impl Into<FieldType>`.
/// - `#[with_builders(some)]`: on an `Option<T>` field, accept `T` and wrap it in `Some`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in fields_named.named.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let options = match FieldOptions::parse(field) {
            Ok(options) => options,
            Err(err) => return err.to_compile_error().into(),
        };

        if options.skip {
            continue;
        }

        let method_ident = format_ident!("with_{}", field_ident);

        let value_ty = if options.some {
            match option_inner(&field.ty) {
                Some(inner) => inner,
                None => {
                    return syn::Error::new(
                        field.ty.span(),
                        "#[with_builders(some)] requires an Option<T> field",
                    )
                    .to_compile_error()
                    .into();
                }
            }
        } else {
            &field.ty
        };

        let (param_ty, converted) = if options.into {
            (quote! { impl ::core::convert::Into<#value_ty> }, quote! { value.into() })
        } else {
            (quote! { #value_ty }, quote! { value })
        };

        let stored = if options.some {
            quote! { ::core::option::Option::Some(#converted) }
        } else {
            converted
        };

        methods.push(quote! {
            #[inline]
            pub fn #method_ident(mut self, value: #param_ty) -> Self {
                self.#field_ident = #stored;
                self
            }
        });
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

#[derive(Default)]
struct FieldOptions {
    skip: bool,
    into: bool,
    some: bool,
}

impl FieldOptions {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut options = FieldOptions::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("with_builders") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                } else if meta.path.is_ident("into") {
                    options.into = true;
                } else if meta.path.is_ident("some") {
                    options.some = true;
                } else {
                    return Err(meta.error("expected `skip`, `into` or `some`"));
                }
                Ok(())
            })?;
        }
        Ok(options)
    }
}

/// Returns `T` for a field typed `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

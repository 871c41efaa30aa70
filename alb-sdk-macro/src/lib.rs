use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derives `alb_sdk_model::Validate`.
///
/// Fields tagged `#[avi(required)]` are reported when they are `None` (or an
/// empty `Vec`); fields tagged `#[avi(nested)]` are descended into.
#[proc_macro_derive(Validate, attributes(avi))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::validate(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `alb_sdk_model::AviObject` for a struct with a `uuid` field.
///
/// The object type defaults to the lower-cased struct name and can be set
/// with `#[avi(object = "...")]`.
#[proc_macro_derive(AviObject, attributes(avi))]
pub fn derive_avi_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::avi_object(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

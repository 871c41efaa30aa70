use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, MetaNameValue, Path, Token, Type,
    ext::IdentExt, punctuated::Punctuated, spanned::Spanned,
};

const ATTR: &str = "avi";

trait ExprInto<T> {
    fn expr_into(&self) -> Option<T>;
}

impl ExprInto<String> for Expr {
    fn expr_into(&self) -> Option<String> {
        if let Expr::Lit(ExprLit {
            attrs: _,
            lit: syn::Lit::Str(lit_str),
        }) = self
        {
            Some(lit_str.value())
        } else {
            None
        }
    }
}

/// Settings from `#[avi(...)]` on a struct.
#[derive(Default, Debug, PartialEq)]
struct ObjectConfig {
    object: Option<String>,
}

/// Flags from `#[avi(...)]` on a field.
#[derive(Default, Debug, PartialEq)]
struct FieldConfig {
    required: bool,
    nested: bool,
}

/// How a field wraps its value type.
#[derive(Debug, PartialEq)]
enum Wrapper {
    Option,
    Vec,
    Plain,
}

fn avi_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident(ATTR))
}

fn parse_object_config(attrs: &[Attribute]) -> syn::Result<ObjectConfig> {
    let mut config = ObjectConfig::default();
    for attr in avi_attrs(attrs) {
        let kv_pairs =
            attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for name_value in kv_pairs {
            let name = name_value.path.to_token_stream().to_string();
            match name.as_str() {
                "object" => {
                    config.object = Some(name_value.value.expr_into().ok_or(syn::Error::new(
                        name_value.span(),
                        "'object' expects a string literal as argument",
                    ))?);
                }
                _ => {
                    return Err(syn::Error::new(
                        name_value.span(),
                        format!("unknown parameter: {}", name),
                    ));
                }
            }
        }
    }
    Ok(config)
}

fn parse_field_config(field: &Field) -> syn::Result<FieldConfig> {
    let mut config = FieldConfig::default();
    for attr in avi_attrs(&field.attrs) {
        let flags = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
        for flag in flags {
            if flag.is_ident("required") {
                config.required = true;
            } else if flag.is_ident("nested") {
                config.nested = true;
            } else {
                return Err(syn::Error::new(
                    flag.span(),
                    format!("unknown field flag: {}", flag.to_token_stream()),
                ));
            }
        }
    }
    Ok(config)
}

fn wrapper_of(ty: &Type) -> Wrapper {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "Option" {
                return Wrapper::Option;
            }
            if segment.ident == "Vec" {
                return Wrapper::Vec;
            }
        }
    }
    Wrapper::Plain
}

fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<impl Iterator<Item = &'a Field>> {
    match &input.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(fields) => Ok(fields.named.iter()),
            _ => Err(syn::Error::new(
                input.ident.span(),
                format!("{derive} can only be derived for structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new(
            input.ident.span(),
            format!("{derive} can only be derived for structs"),
        )),
    }
}

fn field_checks(field: &Field) -> syn::Result<TokenStream> {
    let config = parse_field_config(field)?;
    // fields of named structs always carry an ident
    let Some(ident) = field.ident.as_ref() else {
        return Ok(TokenStream::new());
    };
    let name = ident.unraw().to_string();
    let wrapper = wrapper_of(&field.ty);

    let required = match (config.required, &wrapper) {
        (true, Wrapper::Option) => quote! {
            if self.#ident.is_none() {
                missing.push(format!("{prefix}{}", #name));
            }
        },
        (true, Wrapper::Vec) => quote! {
            if self.#ident.is_empty() {
                missing.push(format!("{prefix}{}", #name));
            }
        },
        _ => TokenStream::new(),
    };

    let nested = match (config.nested, &wrapper) {
        (true, Wrapper::Option) => quote! {
            if let Some(value) = &self.#ident {
                value.collect_missing(&format!("{prefix}{}.", #name), missing);
            }
        },
        (true, Wrapper::Vec) => quote! {
            for (index, value) in self.#ident.iter().enumerate() {
                value.collect_missing(&format!("{prefix}{}[{index}].", #name), missing);
            }
        },
        (true, Wrapper::Plain) => quote! {
            self.#ident.collect_missing(&format!("{prefix}{}.", #name), missing);
        },
        (false, _) => TokenStream::new(),
    };

    Ok(quote! {
        #required
        #nested
    })
}

pub(crate) fn validate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let checks = named_fields(input, "Validate")?
        .map(field_checks)
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::alb_sdk_model::Validate for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn collect_missing(&self, prefix: &str, missing: &mut ::std::vec::Vec<::std::string::String>) {
                #[allow(unused_imports)]
                use ::alb_sdk_model::Validate as _;
                #(#checks)*
            }
        }
    })
}

fn find_field<'a>(input: &'a DeriveInput, name: &str) -> syn::Result<Option<&'a Ident>> {
    Ok(named_fields(input, "AviObject")?
        .filter_map(|f| f.ident.as_ref())
        .find(|ident| ident.unraw() == name))
}

pub(crate) fn avi_object(input: &DeriveInput) -> syn::Result<TokenStream> {
    let config = parse_object_config(&input.attrs)?;
    let ident = &input.ident;
    let object_type = config
        .object
        .unwrap_or_else(|| ident.unraw().to_string().to_lowercase());

    let uuid = find_field(input, "uuid")?.ok_or(syn::Error::new(
        ident.span(),
        "AviObject requires a `uuid: Option<String>` field",
    ))?;
    let name_body = match find_field(input, "name")? {
        Some(name) => quote!(self.#name.as_deref()),
        None => quote!(::std::option::Option::None),
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::alb_sdk_model::AviObject for #ident #ty_generics #where_clause {
            const OBJECT_TYPE: &'static str = #object_type;

            fn uuid(&self) -> ::std::option::Option<&str> {
                self.#uuid.as_deref()
            }

            fn name(&self) -> ::std::option::Option<&str> {
                #name_body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_config() {
        let input: DeriveInput = syn::parse_quote! {
            #[avi(object = "virtualservice")]
            struct VirtualService {
                uuid: Option<String>,
            }
        };
        assert_eq!(
            ObjectConfig {
                object: Some("virtualservice".to_string())
            },
            parse_object_config(&input.attrs).unwrap()
        );

        let input: DeriveInput = syn::parse_quote! {
            struct Pool {
                uuid: Option<String>,
            }
        };
        assert_eq!(ObjectConfig::default(), parse_object_config(&input.attrs).unwrap());

        // error on unknown params and on non-string values
        let input: DeriveInput = syn::parse_quote! {
            #[avi(path = "pool")]
            struct Pool {}
        };
        parse_object_config(&input.attrs).unwrap_err();
        let input: DeriveInput = syn::parse_quote! {
            #[avi(object = 1)]
            struct Pool {}
        };
        parse_object_config(&input.attrs).unwrap_err();
    }

    #[test]
    fn test_parse_field_config() {
        let input: DeriveInput = syn::parse_quote! {
            struct TrustedHostProfile {
                #[serde(skip_serializing_if = "Vec::is_empty")]
                #[avi(required, nested)]
                pub hosts: Vec<TrustedHost>,
                pub name: Option<String>,
                #[avi(readonly)]
                pub url: Option<String>,
            }
        };
        let fields: Vec<&Field> = named_fields(&input, "Validate").unwrap().collect();
        assert_eq!(
            FieldConfig {
                required: true,
                nested: true
            },
            parse_field_config(fields[0]).unwrap()
        );
        assert_eq!(FieldConfig::default(), parse_field_config(fields[1]).unwrap());

        // error on unknown flags
        parse_field_config(fields[2]).unwrap_err();
    }

    #[test]
    fn test_wrapper_of() {
        assert_eq!(Wrapper::Option, wrapper_of(&syn::parse_quote!(Option<Box<Gslb>>)));
        assert_eq!(Wrapper::Vec, wrapper_of(&syn::parse_quote!(::std::vec::Vec<u32>)));
        assert_eq!(Wrapper::Plain, wrapper_of(&syn::parse_quote!(IpAddr)));
    }

    #[test]
    fn test_object_type_defaults_to_lowercase_name() {
        let input: DeriveInput = syn::parse_quote! {
            struct TrustedHostProfile {
                name: Option<String>,
                uuid: Option<String>,
            }
        };
        let ts = avi_object(&input).unwrap().to_string();
        assert!(ts.contains("\"trustedhostprofile\""), "{ts}");
        assert!(ts.contains("as_deref"), "{ts}");
    }

    #[test]
    fn test_object_without_name() {
        let input: DeriveInput = syn::parse_quote! {
            struct LocalWorkerFdsVersion {
                uuid: Option<String>,
            }
        };
        let ts = avi_object(&input).unwrap().to_string();
        assert!(ts.contains("None"), "{ts}");
    }

    #[test]
    fn test_object_requires_uuid() {
        let input: DeriveInput = syn::parse_quote! {
            struct KeyValue {
                key: Option<String>,
            }
        };
        avi_object(&input).unwrap_err();
    }

    #[test]
    fn test_validate_rejects_enums() {
        let input: DeriveInput = syn::parse_quote! {
            enum State { Up, Down }
        };
        validate(&input).unwrap_err();
    }

    #[test]
    fn test_validate_uses_unraw_names() {
        let input: DeriveInput = syn::parse_quote! {
            struct IpAddr {
                #[avi(required)]
                r#type: Option<String>,
            }
        };
        let ts = validate(&input).unwrap().to_string();
        assert!(ts.contains("\"type\""), "{ts}");
        assert!(ts.contains("is_none"), "{ts}");
    }
}

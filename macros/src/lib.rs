use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Type, parse_macro_input};

/// Derive macro implementing the `EnvRecord` trait.
///
/// Each field may carry a `#[field(...)]` attribute holding any number of
/// `name = "value"` string pairs. The pairs are passed through verbatim as
/// tags, so custom tag names configured on the reader resolve the same way
/// the default `env`/`default` pair does. Fields without the attribute,
/// and fields whose type the reader cannot coerce, are left out of the
/// schema and stay untouched on read.
#[proc_macro_derive(EnvRecord, attributes(field))]
pub fn derive_env_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Value kinds the reader can coerce, keyed off the field's Rust type
enum ValueKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Str,
    StrList,
    IntList,
    F32List,
    F64List,
}

impl ValueKind {
    fn variant(&self) -> proc_macro2::TokenStream {
        match self {
            ValueKind::Bool => quote!(Bool),
            ValueKind::I8 => quote!(I8),
            ValueKind::I16 => quote!(I16),
            ValueKind::I32 => quote!(I32),
            ValueKind::I64 => quote!(I64),
            ValueKind::F32 => quote!(F32),
            ValueKind::F64 => quote!(F64),
            ValueKind::Str => quote!(Str),
            ValueKind::StrList => quote!(StrList),
            ValueKind::IntList => quote!(IntList),
            ValueKind::F32List => quote!(F32List),
            ValueKind::F64List => quote!(F64List),
        }
    }
}

fn generate_record(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvRecord only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvRecord only supports structs",
            ));
        }
    };

    let mut pushes = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().unwrap();

        // No #[field] attribute, or no coercible type: the field is not
        // part of the schema and the reader never touches it.
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            continue;
        };
        let Some(kind) = value_kind(&field.ty) else {
            continue;
        };

        let tags = parse_tag_pairs(attr)?;
        let tag_names = tags.iter().map(|(name, _)| name);
        let tag_values = tags.iter().map(|(_, value)| value);

        let cfg_attrs: Vec<&Attribute> = field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
            .collect();

        let name_str = field_name.to_string();
        let variant = kind.variant();

        pushes.push(quote! {
            #(#cfg_attrs)*
            fields.push(::envreadr::Field {
                name: #name_str,
                tags: &[#((#tag_names, #tag_values)),*],
                value: ::envreadr::FieldValue::#variant(&mut self.#field_name),
            });
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envreadr::EnvRecord for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envreadr::Field<'_>> {
                let mut fields = ::std::vec::Vec::new();
                #(#pushes)*
                fields
            }
        }
    })
}

/// Parse `#[field(env = "X", default = "y", ...)]` into ordered pairs.
/// Every entry must be `name = "string literal"`.
fn parse_tag_pairs(attr: &Attribute) -> syn::Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    attr.parse_nested_meta(|meta| {
        let name = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("expected identifier"))?
            .to_string();

        let value: syn::LitStr = meta.value()?.parse()?;
        pairs.push((name, value.value()));

        Ok(())
    })?;

    Ok(pairs)
}

/// Map a field's Rust type to the `FieldValue` variant the reader fills,
/// or `None` when the type has no counterpart.
fn value_kind(ty: &Type) -> Option<ValueKind> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;

    match segment.ident.to_string().as_str() {
        "bool" => Some(ValueKind::Bool),
        "i8" => Some(ValueKind::I8),
        "i16" => Some(ValueKind::I16),
        "i32" => Some(ValueKind::I32),
        "i64" => Some(ValueKind::I64),
        "f32" => Some(ValueKind::F32),
        "f64" => Some(ValueKind::F64),
        "String" => Some(ValueKind::Str),
        "Vec" => match vec_element(segment)?.as_str() {
            "String" => Some(ValueKind::StrList),
            "i64" => Some(ValueKind::IntList),
            "f32" => Some(ValueKind::F32List),
            "f64" => Some(ValueKind::F64List),
            _ => None,
        },
        _ => None,
    }
}

/// Element type name of `Vec<T>`, when `T` is a plain path
fn vec_element(segment: &syn::PathSegment) -> Option<String> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(syn::GenericArgument::Type(Type::Path(inner))) => {
            inner.path.segments.last().map(|s| s.ident.to_string())
        }
        _ => None,
    }
}

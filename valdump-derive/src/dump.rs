//! Implementation of #[derive(Dump)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Fields, Type};

use crate::attrs::{parse_field_attrs, parse_type_attrs, FieldAttrs, Property};

pub fn derive_dump_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = parse_type_attrs(&input.attrs)?;

    // Every type parameter must itself be dumpable
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::valdump::Dump));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let properties = property_members(&attrs.properties);
    let body = match &input.data {
        Data::Struct(data) => struct_body(&data.fields, &properties)?,
        Data::Enum(data) => enum_body(data, &properties)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Dump cannot be derived for unions",
            ))
        }
    };

    let excluded = if attrs.skip {
        quote! {
            fn is_excluded(&self) -> bool {
                true
            }
        }
    } else {
        quote! {}
    };

    let custom = attrs.with.as_ref().map(|path| {
        quote! {
            fn custom_dump(
                &self,
                _options: &::valdump::DumpOptions,
            ) -> ::std::option::Option<::std::string::String> {
                ::std::option::Option::Some(#path(self))
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::valdump::Dump for #name #ty_generics #where_clause {
            #body
            #excluded
            #custom
        }
    })
}

fn struct_body(fields: &Fields, properties: &[TokenStream2]) -> syn::Result<TokenStream2> {
    let mut field_members = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_attrs = parse_field_attrs(&field.attrs)?;
        let (label, access) = match &field.ident {
            Some(ident) => (ident.to_string(), quote!(&self.#ident)),
            None => {
                let index_token = syn::Index::from(index);
                (index.to_string(), quote!(&self.#index_token))
            }
        };
        let public = matches!(field.vis, syn::Visibility::Public(_));
        field_members.push(field_member(&label, access, &field.ty, public, &field_attrs));
    }

    Ok(quote! {
        fn shape(&self) -> ::valdump::Shape<'_> {
            ::valdump::Shape::Composite
        }

        fn members(&self) -> ::std::vec::Vec<::valdump::Member<'_>> {
            #[allow(unused_mut)]
            let mut members = ::std::vec::Vec::new();
            #(members.push(#field_members);)*
            #(members.push(#properties);)*
            members
        }
    })
}

fn enum_body(data: &DataEnum, properties: &[TokenStream2]) -> syn::Result<TokenStream2> {
    let fieldless = data
        .variants
        .iter()
        .all(|variant| matches!(variant.fields, Fields::Unit));

    if fieldless {
        let arms = data.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let label = ident.to_string();
            quote! { Self::#ident => (#label, Self::#ident as i128) }
        });

        return Ok(quote! {
            fn shape(&self) -> ::valdump::Shape<'_> {
                let (name, code): (&'static str, i128) = match *self {
                    #(#arms,)*
                };
                ::valdump::Shape::Enum(::valdump::EnumValue::new(name, code))
            }
        });
    }

    let mut name_arms = Vec::new();
    let mut member_arms = Vec::new();

    for variant in &data.variants {
        let ident = &variant.ident;
        let label = ident.to_string();
        name_arms.push(quote! { Self::#ident { .. } => #label });

        let mut bindings = Vec::new();
        let mut variant_members = Vec::new();

        for (index, field) in variant.fields.iter().enumerate() {
            let field_attrs = parse_field_attrs(&field.attrs)?;
            let (label, binding) = match &field.ident {
                Some(ident) => (ident.to_string(), ident.clone()),
                None => (index.to_string(), format_ident!("__field{}", index)),
            };

            if field_attrs.skip {
                bindings.push(match &field.ident {
                    Some(ident) => quote!(#ident: _),
                    None => quote!(_),
                });
            } else {
                bindings.push(quote!(#binding));
            }

            variant_members.push(field_member(
                &label,
                quote!(#binding),
                &field.ty,
                true,
                &field_attrs,
            ));
        }

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#ident { #(#bindings),* } },
            Fields::Unnamed(_) => quote! { Self::#ident ( #(#bindings),* ) },
            Fields::Unit => quote! { Self::#ident },
        };

        member_arms.push(quote! {
            #pattern => {
                #(members.push(#variant_members);)*
            }
        });
    }

    Ok(quote! {
        fn shape(&self) -> ::valdump::Shape<'_> {
            ::valdump::Shape::Composite
        }

        fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
            let variant = match self {
                #(#name_arms,)*
            };
            ::std::borrow::Cow::Owned(::std::format!(
                "{}::{}",
                ::valdump::short_type_name(::std::any::type_name::<Self>()),
                variant
            ))
        }

        fn members(&self) -> ::std::vec::Vec<::valdump::Member<'_>> {
            #[allow(unused_mut)]
            let mut members = ::std::vec::Vec::new();
            match self {
                #(#member_arms)*
            }
            #(members.push(#properties);)*
            members
        }
    })
}

fn field_member(
    label: &str,
    access: TokenStream2,
    ty: &Type,
    public: bool,
    attrs: &FieldAttrs,
) -> TokenStream2 {
    let label = attrs.rename.clone().unwrap_or_else(|| label.to_string());

    // Skipped fields are listed with the marker but never read
    if attrs.skip {
        let declared = type_string(ty);
        return quote! {
            ::valdump::Member::skipped(#label, #declared, ::valdump::MemberKind::Field)
        };
    }

    let member = quote! { ::valdump::Member::field(#label, #access) };
    if public {
        member
    } else {
        quote! { #member.private() }
    }
}

fn property_members(properties: &[Property]) -> Vec<TokenStream2> {
    properties
        .iter()
        .map(|property| {
            let method = &property.method;
            let label = method.to_string();
            let member = if property.fallible {
                quote! { ::valdump::Member::try_property(#label, move || self.#method()) }
            } else {
                quote! { ::valdump::Member::property(#label, move || self.#method()) }
            };
            if property.private {
                quote! { #member.private() }
            } else {
                member
            }
        })
        .collect()
}

fn type_string(ty: &Type) -> String {
    quote!(#ty)
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

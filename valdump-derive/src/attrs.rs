//! Parsing of `#[dump(...)]` attributes

use syn::{Attribute, Ident, LitStr, Path};

#[derive(Default)]
pub struct TypeAttrs {
    pub skip: bool,
    pub with: Option<Path>,
    pub properties: Vec<Property>,
}

pub struct Property {
    pub method: Ident,
    pub fallible: bool,
    pub private: bool,
}

#[derive(Default)]
pub struct FieldAttrs {
    pub skip: bool,
    pub rename: Option<String>,
}

pub fn parse_type_attrs(attrs: &[Attribute]) -> syn::Result<TypeAttrs> {
    let mut parsed = TypeAttrs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("dump")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("with") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.with = Some(value.parse()?);
            } else if meta.path.is_ident("property") {
                let mut method = None;
                let mut fallible = false;
                let mut private = false;

                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("fallible") {
                        fallible = true;
                    } else if inner.path.is_ident("private") {
                        private = true;
                    } else if let Some(ident) = inner.path.get_ident() {
                        if method.is_some() {
                            return Err(inner.error("property takes a single method name"));
                        }
                        method = Some(ident.clone());
                    } else {
                        return Err(inner.error("expected a method name"));
                    }
                    Ok(())
                })?;

                let method = method.ok_or_else(|| meta.error("property needs a method name"))?;
                parsed.properties.push(Property {
                    method,
                    fallible,
                    private,
                });
            } else {
                return Err(meta.error("unsupported dump attribute on a type"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("dump")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
            } else {
                return Err(meta.error("unsupported dump attribute on a field"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

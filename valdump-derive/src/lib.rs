//! Procedural macros for valdump
//!
//! This crate provides `#[derive(Dump)]`, which implements `valdump::Dump`
//! for structs and enums.

use proc_macro::TokenStream;

mod attrs;
mod dump;

/// Derive `valdump::Dump`.
///
/// Structs become composites whose members are their fields. Non-`pub`
/// fields are private members. Fieldless enums render as enum values with
/// their discriminant; enums with data become composites named
/// `Enum::Variant`.
///
/// # Attributes
///
/// On the type:
/// - `#[dump(skip)]` - the type never appears in a dump
/// - `#[dump(with = "path")]` - render with `fn(&Self) -> String` instead of members
/// - `#[dump(property(method))]` - add `self.method()` as a property
/// - `#[dump(property(method, fallible))]` - `method` returns `Result<T, E: Display>`
/// - `#[dump(property(method, private))]` - the property is private
///
/// On a field:
/// - `#[dump(skip)]` - never shown; the field type need not implement `Dump`
/// - `#[dump(rename = "name")]` - show the field under another name
///
/// # Example
///
/// ```ignore
/// #[derive(Dump)]
/// #[dump(property(full_name))]
/// pub struct Person {
///     pub first: String,
///     pub last: String,
///     #[dump(skip)]
///     password_hash: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Dump, attributes(dump))]
pub fn derive_dump(input: TokenStream) -> TokenStream {
    dump::derive_dump_impl(input)
}

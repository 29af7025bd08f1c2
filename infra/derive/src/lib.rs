#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the gateway crates.
//!
//! * [`macro@nshop_error`] turns a plain enum into a context-aware error type.
//! * [`macro@nshop_slice`] turns a struct into an `Arc`-backed feature slice handle that can be
//!   registered in the kernel's `ApiState`.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros; the
//! `tests/` directory exercises them through `trybuild`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Defines a crate-level error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A companion `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant carrying a `source` field.
/// * `From<Source>` for every variant carrying a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-local `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// Every variant uses named fields. A variant with a `source` field must also have a
/// `context: Option<Cow<'static, str>>` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[nshop_derive::nshop_error]
/// pub enum FetchError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch(client: &reqwest::Client) -> Result<(), FetchError> {
///     client.get("http://localhost").build().context("Building request")?;
///     Err("not implemented".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn nshop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it and
/// implements `nshop_kernel::domain::registry::FeatureSlice`.
///
/// # Example
///
/// ```rust,ignore
/// #[nshop_derive::nshop_slice]
/// pub struct Flags {
///     registry: FlagRegistry,
/// }
///
/// let slice = Flags::new(FlagsInner { registry });
/// ```
#[proc_macro_attribute]
pub fn nshop_slice(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}

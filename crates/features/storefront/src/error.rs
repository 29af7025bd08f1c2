use std::borrow::Cow;

/// A specialized [`StorefrontError`] enum of this crate.
#[nshop_derive::nshop_error]
pub enum StorefrontError {
    #[error("Cart is empty{}", format_context(.context))]
    EmptyCart { context: Option<Cow<'static, str>> },
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Client store payload could not be encoded.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error("Internal storefront error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

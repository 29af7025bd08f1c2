use std::borrow::Cow;

/// A specialized [`FlagsError`] enum of this crate.
#[nshop_derive::nshop_error]
pub enum FlagsError {
    /// Malformed flag configuration.
    #[error("Flags config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[cfg(feature = "server")]
    #[error("Flags state error{}: {source}", format_context(.context))]
    State {
        source: nshop_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },
    #[error("Internal flags error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for FlagsError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use nshop_kernel::domain::envelope::Envelope;

        tracing::error!(error = %self, "Flags request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(Envelope::failure(self.to_string())))
            .into_response()
    }
}

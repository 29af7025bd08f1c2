use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nshop_domain::envelope::Envelope;
use nshop_kernel::server::ApiStateError;
use std::borrow::Cow;

/// A specialized [`ProxyError`] enum of this crate.
#[nshop_derive::nshop_error]
pub enum ProxyError {
    /// JSON body announced by the client did not parse.
    #[error("Invalid request body{}: {message}", format_context(.context))]
    InvalidBody { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Upload body is not multipart form data or could not be read.
    #[error("Invalid form data{}: {message}", format_context(.context))]
    InvalidForm { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Upload attempted without an `Authorization` header.
    #[error("Unauthorized{}", format_context(.context))]
    Unauthorized { context: Option<Cow<'static, str>> },
    /// Transport or body failure talking to the upstream.
    #[error("Upstream error{}: {source}", format_context(.context))]
    Upstream { source: reqwest::Error, context: Option<Cow<'static, str>> },
    /// Upload transport failure; `message` is the route's public failure text.
    #[error("Upload failed{}: {message}", format_context(.context))]
    Upload { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Upstream answered with something the route cannot relay.
    #[error("Bad gateway{}: {message}", format_context(.context))]
    BadGateway { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Upstream announced JSON but sent something else.
    #[error("Response relay error{}: {source}", format_context(.context))]
    Relay { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error("Proxy state error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },
    #[error("Internal proxy error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ProxyError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody { .. } | Self::InvalidForm { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            Self::Upstream { .. }
            | Self::Upload { .. }
            | Self::Relay { .. }
            | Self::State { .. }
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope. Context stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidBody { .. } => "Invalid request body".to_owned(),
            Self::InvalidForm { .. } => "Invalid form data".to_owned(),
            Self::Unauthorized { .. } => "Unauthorized".to_owned(),
            Self::Upload { message, .. }
            | Self::BadGateway { message, .. }
            | Self::Internal { message, .. } => message.to_string(),
            Self::Upstream { source, .. } => source.to_string(),
            Self::Relay { source, .. } => source.to_string(),
            Self::State { source, .. } => source.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Proxy request failed");
        } else {
            tracing::debug!(error = %self, "Proxy request rejected");
        }
        (status, Json(Envelope::failure(self.public_message()))).into_response()
    }
}

use nshop_derive::nshop_error;
use std::borrow::Cow;

#[nshop_error]
pub enum UploadError {
    #[error("Read error{}: {source}", format_context(.context))]
    Read {
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unauthorized{}: {message}", format_context(.context))]
    Unauthorized { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<Vec<u8>, UploadError> {
    let bytes = std::fs::read("/definitely/missing").context("Reading form body")?;
    Ok(bytes)
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().starts_with("Read error (Reading form body)"));

    let err: UploadError = "boom".into();
    assert!(matches!(err, UploadError::Internal { .. }));

    let err: Result<(), UploadError> = Err(UploadError::Unauthorized {
        message: "missing header".into(),
        context: None,
    });
    let err = err.context("upload").unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized (upload): missing header");
}

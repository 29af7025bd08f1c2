use serde::{Deserialize, Serialize};

pub const OPERATION_COMPLETED: &str = "Operation completed successfully";

/// JSON body the gateway produces itself, as opposed to bodies relayed from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl Envelope {
    /// Stand-in for an upstream success that came back without a body.
    #[must_use]
    pub fn completed() -> Self {
        Self { success: true, message: Some(OPERATION_COMPLETED.to_owned()), file_url: None }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), file_url: None }
    }

    #[must_use]
    pub fn file_url(url: impl Into<String>) -> Self {
        Self { success: true, message: None, file_url: Some(url.into()) }
    }
}

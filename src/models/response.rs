use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Uniform JSON envelope returned by every panel endpoint.
///
/// The backend answers HTTP 200 even for application-level failures;
/// `code` is the real verdict. Zero means success, anything else carries
/// an explanation in `message`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub code: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Free-form named property bag attached to several entities.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metadata {
    pub name: String,
    pub properties: HashMap<String, String>,
}

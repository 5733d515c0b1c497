use serde::{Deserialize, Serialize};

/// Payload of the validate and add endpoints.
///
/// Both fields are sent trimmed. `name` is an empty string when the user left
/// the field blank; the server treats that as "detect automatically".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRequest {
    pub url: String,
    pub name: String,
}

impl SourceRequest {
    /// Builds a request from raw form input. Returns `None` when the url is blank.
    pub fn from_form(url: &str, name: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
            name: name.trim().to_string(),
        })
    }
}

//! Response envelopes of the `/api/sources` endpoints.
//!
//! Every endpoint answers `{ "success": bool, ... }`. When the content API fails
//! hard it replies with its framework error shape instead (`{ "detail": ... }`,
//! no `success` field at all); those bodies decode as `success: false` and the
//! detail becomes the failure message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::source::Source;
use crate::model::validation::ValidationResult;

/// The server answered but reported a logical failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected(pub Option<String>);

/// Fields shared by all envelopes that describe a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Failure {
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.trim().is_empty()) {
            return Some(error.clone());
        }
        match &self.detail {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Answer of `POST /api/sources/validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ValidationResult>,
    #[serde(flatten)]
    pub failure: Failure,
}

impl ValidateResponse {
    pub fn into_result(self) -> Result<ValidationResult, Rejected> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(Rejected(Some(
                "Resposta de validação sem dados".to_string(),
            ))),
            (false, _) => Err(Rejected(self.failure.message())),
        }
    }
}

/// Answer of add, toggle and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    /// Informational text the server attaches on success.
    #[serde(default)]
    pub message: Option<String>,
    /// New state after a toggle.
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(flatten)]
    pub failure: Failure,
}

/// What a successful mutation reported back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationAck {
    pub message: Option<String>,
    pub active: Option<bool>,
}

impl MutationResponse {
    pub fn into_result(self) -> Result<MutationAck, Rejected> {
        if self.success {
            Ok(MutationAck {
                message: self.message,
                active: self.active,
            })
        } else {
            Err(Rejected(self.failure.message()))
        }
    }
}

/// Answer of `GET /api/sources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(flatten)]
    pub failure: Failure,
}

impl SourceListResponse {
    pub fn into_result(self) -> Result<Vec<Source>, Rejected> {
        if self.success {
            Ok(self.sources)
        } else {
            Err(Rejected(self.failure.message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_failure_carries_error() {
        let response: ValidateResponse =
            serde_json::from_str(r#"{"success": false, "data": null, "error": "timeout"}"#).unwrap();
        assert_eq!(response.into_result(), Err(Rejected(Some("timeout".into()))));
    }

    #[test]
    fn validate_success_without_data_is_rejected() {
        let response: ValidateResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn framework_error_decodes_as_failure() {
        let response: SourceListResponse =
            serde_json::from_str(r#"{"detail": "connection refused"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.into_result(),
            Err(Rejected(Some("connection refused".into())))
        );

        let response: MutationResponse =
            serde_json::from_str(r#"{"detail": [{"loc": ["path", "source_id"]}]}"#).unwrap();
        let Err(Rejected(Some(message))) = response.into_result() else {
            panic!("expected a rejection with message");
        };
        assert!(message.contains("source_id"));
    }

    #[test]
    fn toggle_ack_reports_new_state() {
        let response: MutationResponse = serde_json::from_str(
            r#"{"success": true, "active": false, "message": "Fonte desativada com sucesso"}"#,
        )
        .unwrap();
        let ack = response.into_result().unwrap();
        assert_eq!(ack.active, Some(false));
    }

    #[test]
    fn list_failure_without_message() {
        let response: SourceListResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(response.into_result(), Err(Rejected(None)));
    }
}

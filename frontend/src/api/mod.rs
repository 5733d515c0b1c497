//! Client for the `/api/sources` endpoints of the content API.
//!
//! `SourcesApi` is the seam between the source manager workflows and the
//! network. The browser build talks HTTP through `gloo-net`; tests plug in a
//! scripted implementation.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use common::model::source::Source;
use common::model::validation::ValidationResult;
use common::requests::SourceRequest;
use common::responses::{
    MutationAck, MutationResponse, Rejected, SourceListResponse, ValidateResponse,
};

/// Default mount point of the sources API, relative to the page origin.
pub const SOURCES_API_PATH: &str = "/api/sources";

/// Why a call to the sources API did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable answer: network failure, or a body
    /// that was not the expected JSON.
    #[error("{0}")]
    Transport(String),
    /// The server answered with `success: false`.
    #[error("{}", .0.as_deref().unwrap_or("Erro desconhecido"))]
    Server(Option<String>),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<Rejected> for ApiError {
    fn from(rejected: Rejected) -> Self {
        ApiError::Server(rejected.0)
    }
}

#[async_trait(?Send)]
pub trait SourcesApi {
    /// `POST {base}/validate`
    async fn validate(&self, request: &SourceRequest) -> Result<ValidationResult, ApiError>;

    /// `POST {base}/add`
    async fn add(&self, request: &SourceRequest) -> Result<MutationAck, ApiError>;

    /// `GET {base}`
    async fn list(&self) -> Result<Vec<Source>, ApiError>;

    /// `PATCH {base}/{id}/toggle`
    async fn toggle(&self, id: i64) -> Result<MutationAck, ApiError>;

    /// `DELETE {base}/{id}`
    async fn delete(&self, id: i64) -> Result<MutationAck, ApiError>;
}

/// `SourcesApi` over `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSourcesApi {
    base: String,
}

impl HttpSourcesApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, tail: &str) -> String {
        if tail.is_empty() {
            self.base.clone()
        } else {
            format!("{}/{}", self.base, tail)
        }
    }
}

impl Default for HttpSourcesApi {
    fn default() -> Self {
        Self::new(SOURCES_API_PATH)
    }
}

/// Reads the envelope regardless of the HTTP status: the API reports its
/// failures in the body, even on 4xx/5xx.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        log::warn!(
            "{} answered {} {}",
            response.url(),
            response.status(),
            response.status_text()
        );
    }
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl SourcesApi for HttpSourcesApi {
    async fn validate(&self, request: &SourceRequest) -> Result<ValidationResult, ApiError> {
        let response = Request::post(&self.endpoint("validate"))
            .json(request)?
            .send()
            .await?;
        let envelope: ValidateResponse = decode(response).await?;
        Ok(envelope.into_result()?)
    }

    async fn add(&self, request: &SourceRequest) -> Result<MutationAck, ApiError> {
        let response = Request::post(&self.endpoint("add"))
            .json(request)?
            .send()
            .await?;
        let envelope: MutationResponse = decode(response).await?;
        Ok(envelope.into_result()?)
    }

    async fn list(&self) -> Result<Vec<Source>, ApiError> {
        let response = Request::get(&self.endpoint("")).send().await?;
        let envelope: SourceListResponse = decode(response).await?;
        Ok(envelope.into_result()?)
    }

    async fn toggle(&self, id: i64) -> Result<MutationAck, ApiError> {
        let response = Request::patch(&self.endpoint(&format!("{}/toggle", id)))
            .send()
            .await?;
        let envelope: MutationResponse = decode(response).await?;
        Ok(envelope.into_result()?)
    }

    async fn delete(&self, id: i64) -> Result<MutationAck, ApiError> {
        let response = Request::delete(&self.endpoint(&id.to_string()))
            .send()
            .await?;
        let envelope: MutationResponse = decode(response).await?;
        Ok(envelope.into_result()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_the_base() {
        let api = HttpSourcesApi::new("/api/sources/");
        assert_eq!(api.endpoint(""), "/api/sources");
        assert_eq!(api.endpoint("validate"), "/api/sources/validate");
        assert_eq!(api.endpoint("7/toggle"), "/api/sources/7/toggle");
        assert_eq!(HttpSourcesApi::default().endpoint("3"), "/api/sources/3");
    }

    #[test]
    fn server_errors_without_message_get_a_placeholder() {
        assert_eq!(ApiError::Server(None).to_string(), "Erro desconhecido");
        assert_eq!(ApiError::Server(Some("duplicada".into())).to_string(), "duplicada");
        assert_eq!(
            ApiError::from(Rejected(Some("x".into()))),
            ApiError::Server(Some("x".into()))
        );
    }
}

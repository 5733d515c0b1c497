use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};

use super::error::ProxyError;

/// Client side of the relay: where to send requests and the pooled client to send them with.
#[derive(Clone, Debug)]
pub struct Upstream {
    base: String,
    client: reqwest::Client,
}

impl Upstream {
    pub fn new(base: &str) -> Result<Self, ProxyError> {
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Upstream URL for a local path (query string included).
    pub fn target_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base, path_and_query)
    }
}

/// Relays one request to the upstream.
///
/// Method, path, query string, `content-type` and body are passed on; the
/// upstream status, `content-type` and body come back as they are, including
/// upstream errors.
pub(crate) async fn process(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());
    let target = upstream.target_for(path_and_query);
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::Method(req.method().to_string()))?;
    debug!("{} {} -> {}", method, path_and_query, target);

    let mut outgoing = upstream.client.request(method, &target).body(body.to_vec());
    if let Some(content_type) = req.headers().get(CONTENT_TYPE) {
        outgoing = outgoing.header(reqwest::header::CONTENT_TYPE, content_type.as_bytes());
    }

    let response = outgoing.send().await.map_err(|e| {
        warn!("upstream request to {} failed: {}", target, e);
        ProxyError::from(e)
    })?;

    let status = response.status().as_u16();
    let status = StatusCode::from_u16(status).map_err(|_| ProxyError::Status(status))?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await?;

    let mut builder = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        builder.content_type(content_type);
    }
    Ok(builder.body(bytes))
}

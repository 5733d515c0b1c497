use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::{Failure, MutationResponse};
use thiserror::Error;

/// Failure of the relay itself, as opposed to an error answered by the upstream.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Falha ao contatar a API de conteúdo: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("Método HTTP não suportado: {0}")]
    Method(String),
    #[error("Status inválido da API de conteúdo: {0}")]
    Status(u16),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn error_response(&self) -> HttpResponse {
        let body = MutationResponse {
            success: false,
            message: None,
            active: None,
            failure: Failure {
                error: Some(self.to_string()),
                detail: None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

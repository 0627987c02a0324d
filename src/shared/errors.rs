// src/shared/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

use super::shared_structs::GenericResponse;

/// Erros que atravessam store → serviço → rota sem mudar de tipo.
/// A conversão para status HTTP acontece somente em `ResponseError`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(entidade: &str, id: i32) -> Self {
        Self::NotFound(format!("{} with ID {} not found", entidade, id))
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Store(e.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Falhas do store não expõem detalhes internos ao cliente
        let message = match self {
            ServiceError::Store(detalhe) => {
                error!(error = %detalhe, "Erro no store");
                "Internal server error".to_string()
            }
            outro => {
                warn!(error = %outro, "Requisição rejeitada");
                outro.to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(GenericResponse::erro(message))
    }
}

// src/shared/fallback.rs

use actix_web::HttpResponse;

use super::shared_structs::GenericResponse;

/// Resposta para métodos não suportados em um recurso conhecido.
pub async fn metodo_nao_permitido() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(GenericResponse::erro("Method not allowed"))
}

/// Resposta para rotas inexistentes.
pub async fn rota_nao_encontrada() -> HttpResponse {
    HttpResponse::NotFound().json(GenericResponse::erro("Resource not found"))
}

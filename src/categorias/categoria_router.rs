// src/categorias/categoria_router.rs

use actix_web::{web, HttpResponse};

// Importa as structs de categoria
use super::categoria_structs::NovaCategoria;

use crate::shared::errors::ServiceError;
use crate::shared::extractors::IdPath;
use crate::shared::fallback::metodo_nao_permitido;
use crate::shared::shared_structs::GenericResponse;

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Registra as rotas de categorias. Métodos fora da lista respondem 405.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(buscar_categorias))
            .route(web::post().to(cadastrar_categoria))
            .default_service(web::to(metodo_nao_permitido)),
    )
    .service(
        web::resource("/categories/{id}")
            .route(web::get().to(buscar_categoria_por_id))
            .route(web::put().to(atualizar_categoria))
            .route(web::delete().to(deletar_categoria))
            .default_service(web::to(metodo_nao_permitido)),
    );
}

/// Rota para buscar todas as categorias.
pub async fn buscar_categorias(data: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let categorias = data.categorias.get_all().await?;
    Ok(HttpResponse::Ok().json(categorias))
}

/// Rota para cadastrar uma nova categoria. Responde 201 com a categoria criada.
pub async fn cadastrar_categoria(
    data: web::Data<AppState>,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ServiceError> {
    let categoria = data.categorias.create(item.into_inner()).await?;
    Ok(HttpResponse::Created().json(categoria))
}

/// Rota para buscar uma categoria por ID.
pub async fn buscar_categoria_por_id(
    data: web::Data<AppState>,
    id: IdPath,
) -> Result<HttpResponse, ServiceError> {
    let categoria = data.categorias.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(categoria))
}

/// Rota para atualizar uma categoria existente.
pub async fn atualizar_categoria(
    data: web::Data<AppState>,
    id: IdPath,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ServiceError> {
    let categoria = data
        .categorias
        .update(id.into_inner(), item.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(categoria))
}

/// Rota para deletar uma categoria. Produtos associados permanecem intactos.
pub async fn deletar_categoria(
    data: web::Data<AppState>,
    id: IdPath,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    data.categorias.delete(id).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Category deleted successfully",
        serde_json::json!({ "id": id }),
    )))
}

// src/produtos/produtos_router.rs

use actix_web::{web, HttpResponse};

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_structs::NovoProduto;

use crate::shared::errors::ServiceError;
use crate::shared::extractors::IdPath;
use crate::shared::fallback::metodo_nao_permitido;
use crate::shared::shared_structs::GenericResponse;

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Registra as rotas de produtos. Métodos fora da lista respondem 405.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/products")
            .route(web::get().to(buscar_produtos))
            .route(web::post().to(cadastrar_produto))
            .default_service(web::to(metodo_nao_permitido)),
    )
    .service(
        web::resource("/products/{id}")
            .route(web::get().to(buscar_produto_por_id))
            .route(web::put().to(atualizar_produto))
            .route(web::delete().to(deletar_produto))
            .default_service(web::to(metodo_nao_permitido)),
    );
}

/// Rota para buscar todos os produtos.
///
/// Cada produto vem com `category_name` preenchido pelo serviço a partir das
/// categorias atuais; sem categoria correspondente o nome vem vazio.
pub async fn buscar_produtos(data: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let produtos = data.produtos.get_all().await?;
    Ok(HttpResponse::Ok().json(produtos))
}

/// Rota para inserir um novo produto.
///
/// Recebe os dados do novo produto via JSON no corpo da requisição.
/// `category_id` pode apontar para uma categoria inexistente.
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>, // O corpo da requisição JSON é desserializado para NovoProduto
) -> Result<HttpResponse, ServiceError> {
    let produto = data.produtos.create(item.into_inner()).await?;
    Ok(HttpResponse::Created().json(produto))
}

/// Rota para buscar um produto por ID.
pub async fn buscar_produto_por_id(
    data: web::Data<AppState>,
    id: IdPath,
) -> Result<HttpResponse, ServiceError> {
    let produto = data.produtos.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para atualizar um produto existente.
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    id: IdPath,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ServiceError> {
    let produto = data.produtos.update(id.into_inner(), item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para deletar um produto.
pub async fn deletar_produto(
    data: web::Data<AppState>,
    id: IdPath,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    data.produtos.delete(id).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Product deleted successfully",
        serde_json::json!({ "id": id }),
    )))
}

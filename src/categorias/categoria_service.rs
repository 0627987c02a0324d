// src/categorias/categoria_service.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::categoria_structs::{Categoria, NovaCategoria};
use crate::shared::errors::ServiceError;
use crate::store::Store;

/// Operações de categoria usadas pelas rotas.
#[async_trait]
pub trait CategoriaService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Categoria>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Categoria, ServiceError>;
    async fn create(&self, nova: NovaCategoria) -> Result<Categoria, ServiceError>;
    async fn update(&self, id: i32, nova: NovaCategoria) -> Result<Categoria, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// Serviço de categorias sobre um `Store<Categoria>`.
pub struct CategoriaServiceImpl {
    store: Arc<dyn Store<Categoria>>,
}

impl CategoriaServiceImpl {
    pub fn new(store: Arc<dyn Store<Categoria>>) -> Self {
        CategoriaServiceImpl { store }
    }
}

/// Nome é o único campo obrigatório; nomes repetidos são permitidos.
fn validar(nova: &NovaCategoria) -> Result<(), ServiceError> {
    if nova.name.trim().is_empty() {
        return Err(ServiceError::Validation("Category name is required".to_string()));
    }
    Ok(())
}

#[async_trait]
impl CategoriaService for CategoriaServiceImpl {
    async fn get_all(&self) -> Result<Vec<Categoria>, ServiceError> {
        self.store.get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Categoria, ServiceError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }

    async fn create(&self, nova: NovaCategoria) -> Result<Categoria, ServiceError> {
        validar(&nova)?;
        let categoria = self.store.insert(Categoria::from_nova(0, nova)).await?;
        info!(id = categoria.id, name = %categoria.name, "Categoria cadastrada");
        Ok(categoria)
    }

    async fn update(&self, id: i32, nova: NovaCategoria) -> Result<Categoria, ServiceError> {
        // Id inexistente é NotFound mesmo com corpo inválido
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;
        validar(&nova)?;
        // Pode ter sido removida entre a consulta e a substituição
        let categoria = self
            .store
            .replace(Categoria::from_nova(id, nova))
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;
        info!(id, "Categoria atualizada");
        Ok(categoria)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        // Produtos que apontam para esta categoria não são tocados
        if !self.store.remove(id).await? {
            return Err(ServiceError::not_found("Category", id));
        }
        info!(id, "Categoria deletada");
        Ok(())
    }
}

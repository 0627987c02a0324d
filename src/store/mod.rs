// src/store/mod.rs

//! Abstração do armazenamento de registros endereçados por id inteiro.
//!
//! Cada serviço recebe o seu `Arc<dyn Store<T>>` na inicialização; a troca
//! entre memória e Postgres não afeta a lógica dos serviços.

use async_trait::async_trait;

use crate::shared::errors::ServiceError;

// Implementação em memória (uma trava por coleção)
pub mod memory;
// Implementação sobre tabelas do PostgreSQL
pub mod postgres;
// Dados de demonstração para o backend em memória
pub mod seed;

pub use memory::MemoryStore;

/// Registro guardado por um store genérico: expõe e recebe o seu id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

/// Operações de armazenamento usadas pelos serviços.
#[async_trait]
pub trait Store<T: Send + 'static>: Send + Sync {
    /// Todos os registros, ordenados por id.
    async fn get_all(&self) -> Result<Vec<T>, ServiceError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<T>, ServiceError>;

    /// Atribui o próximo id livre, grava e devolve o registro gravado.
    async fn insert(&self, registro: T) -> Result<T, ServiceError>;

    /// Substitui o registro de mesmo id. `Ok(None)` quando o id não existe.
    async fn replace(&self, registro: T) -> Result<Option<T>, ServiceError>;

    /// Remove pelo id; devolve `false` quando nada foi removido.
    async fn remove(&self, id: i32) -> Result<bool, ServiceError>;
}

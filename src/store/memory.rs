// src/store/memory.rs

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{Record, Store};
use crate::shared::errors::ServiceError;

/// Conteúdo protegido pela trava: registros e o contador de ids.
struct Tabela<T> {
    registros: Vec<T>,
    proximo_id: i32,
}

/// Store em memória para uma coleção.
///
/// RwLock permite múltiplos leitores ou um único escritor, então inserção,
/// substituição e remoção nunca se intercalam com leituras da mesma coleção.
/// Ids começam em 1 e nunca são reaproveitados, mesmo após remoções.
pub struct MemoryStore<T> {
    tabela: RwLock<Tabela<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Cria o store já populado. O contador continua após o maior id recebido.
    pub fn with_records(mut registros: Vec<T>) -> Self {
        registros.sort_by_key(|r| r.id());
        registros.dedup_by_key(|r| r.id());
        let proximo_id = registros.last().map_or(1, |r| r.id().saturating_add(1).max(1));

        MemoryStore {
            tabela: RwLock::new(Tabela { registros, proximo_id }),
        }
    }

    fn ler(&self) -> Result<RwLockReadGuard<'_, Tabela<T>>, ServiceError> {
        self.tabela
            .read()
            .map_err(|_| ServiceError::Store("memory store lock poisoned".to_string()))
    }

    fn escrever(&self) -> Result<RwLockWriteGuard<'_, Tabela<T>>, ServiceError> {
        self.tabela
            .write()
            .map_err(|_| ServiceError::Store("memory store lock poisoned".to_string()))
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Store<T> for MemoryStore<T> {
    async fn get_all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.ler()?.registros.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<T>, ServiceError> {
        Ok(self.ler()?.registros.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, mut registro: T) -> Result<T, ServiceError> {
        let mut tabela = self.escrever()?;
        let id = tabela.proximo_id;
        tabela.proximo_id = id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Store("id space exhausted".to_string()))?;

        registro.set_id(id);
        // Ids crescentes: o push mantém o vetor ordenado
        tabela.registros.push(registro.clone());
        Ok(registro)
    }

    async fn replace(&self, registro: T) -> Result<Option<T>, ServiceError> {
        let mut tabela = self.escrever()?;
        match tabela.registros.iter_mut().find(|r| r.id() == registro.id()) {
            Some(existente) => {
                *existente = registro.clone();
                Ok(Some(registro))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let mut tabela = self.escrever()?;
        let antes = tabela.registros.len();
        tabela.registros.retain(|r| r.id() != id);
        Ok(tabela.registros.len() != antes)
    }
}

// src/categorias/categoria_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::Record;

/// Estrutura para receber dados de uma categoria na requisição POST/PUT.
/// Um `id` enviado no corpo é ignorado: o id vem do store ou do path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NovaCategoria {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Estrutura que representa uma categoria armazenada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Categoria {
    /// Monta o registro a partir da requisição. O id 0 é substituído pelo store.
    pub fn from_nova(id: i32, nova: NovaCategoria) -> Self {
        Categoria {
            id,
            name: nova.name,
            description: nova.description,
        }
    }
}

impl Record for Categoria {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

// src/produtos/produtos_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::Record;

/// Estrutura para receber dados do produto na requisição POST/PUT.
/// `id` e `category_name` enviados no corpo são ignorados.
#[derive(Debug, Clone, Deserialize)]
pub struct NovoProduto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)] // Ausente equivale a "sem categoria"
    pub category_id: i32,
}

/// Estrutura que representa um produto.
///
/// `category_name` não é coluna nem campo persistido com valor próprio: o
/// serviço de produtos o preenche a cada leitura a partir de `category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Produto {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: i32,
    #[serde(default)]
    #[sqlx(default)]
    pub category_name: String,
}

impl Produto {
    /// Monta o registro a partir da requisição, sempre com `category_name` vazio.
    pub fn from_novo(id: i32, novo: NovoProduto) -> Self {
        Produto {
            id,
            name: novo.name,
            price: novo.price,
            stock: novo.stock,
            category_id: novo.category_id,
            category_name: String::new(),
        }
    }
}

impl Record for Produto {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, query_as, PgPool};
use tracing::info;

use super::Store;
use crate::categorias::categoria_structs::Categoria;
use crate::produtos::produtos_structs::Produto;
use crate::shared::errors::ServiceError;

/// Conecta ao PostgreSQL usando um pool de conexões.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, ServiceError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Cria as tabelas quando ainda não existem.
///
/// Sem chave estrangeira em `products.category_id`: excluir uma categoria não
/// afeta os produtos, e um id inexistente é aceito. `category_name` não é coluna.
pub async fn prepare_schema(pool: &PgPool) -> Result<(), ServiceError> {
    query(
        "CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(pool)
    .await?;

    query(
        "CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price BIGINT NOT NULL,
            stock INTEGER NOT NULL,
            category_id INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;

    info!("Schema do PostgreSQL verificado");
    Ok(())
}

/// Categorias na tabela `categories`.
pub struct PgCategoriaStore {
    pool: PgPool,
}

impl PgCategoriaStore {
    pub fn new(pool: PgPool) -> Self {
        PgCategoriaStore { pool }
    }
}

#[async_trait]
impl Store<Categoria> for PgCategoriaStore {
    async fn get_all(&self) -> Result<Vec<Categoria>, ServiceError> {
        let categorias = query_as::<_, Categoria>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categorias)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Categoria>, ServiceError> {
        let categoria = query_as::<_, Categoria>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(categoria)
    }

    async fn insert(&self, registro: Categoria) -> Result<Categoria, ServiceError> {
        let categoria = query_as::<_, Categoria>(
            "INSERT INTO categories (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(&registro.name)
        .bind(&registro.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(categoria)
    }

    async fn replace(&self, registro: Categoria) -> Result<Option<Categoria>, ServiceError> {
        let categoria = query_as::<_, Categoria>(
            "UPDATE categories SET name = $1, description = $2 WHERE id = $3
             RETURNING id, name, description",
        )
        .bind(&registro.name)
        .bind(&registro.description)
        .bind(registro.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(categoria)
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let res = query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

/// Produtos na tabela `products`. `category_name` volta sempre vazio daqui.
pub struct PgProdutoStore {
    pool: PgPool,
}

impl PgProdutoStore {
    pub fn new(pool: PgPool) -> Self {
        PgProdutoStore { pool }
    }
}

#[async_trait]
impl Store<Produto> for PgProdutoStore {
    async fn get_all(&self) -> Result<Vec<Produto>, ServiceError> {
        let produtos = query_as::<_, Produto>(
            "SELECT id, name, price, stock, category_id FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Produto>, ServiceError> {
        let produto = query_as::<_, Produto>(
            "SELECT id, name, price, stock, category_id FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(produto)
    }

    async fn insert(&self, registro: Produto) -> Result<Produto, ServiceError> {
        let produto = query_as::<_, Produto>(
            "INSERT INTO products (name, price, stock, category_id) VALUES ($1, $2, $3, $4)
             RETURNING id, name, price, stock, category_id",
        )
        .bind(&registro.name)
        .bind(registro.price)
        .bind(registro.stock)
        .bind(registro.category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(produto)
    }

    async fn replace(&self, registro: Produto) -> Result<Option<Produto>, ServiceError> {
        let produto = query_as::<_, Produto>(
            "UPDATE products SET name = $1, price = $2, stock = $3, category_id = $4
             WHERE id = $5
             RETURNING id, name, price, stock, category_id",
        )
        .bind(&registro.name)
        .bind(registro.price)
        .bind(registro.stock)
        .bind(registro.category_id)
        .bind(registro.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(produto)
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let res = query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

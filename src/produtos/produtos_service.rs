// src/produtos/produtos_service.rs

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::info;

use super::produtos_structs::{NovoProduto, Produto};
use crate::categorias::categoria_structs::Categoria;
use crate::shared::errors::ServiceError;
use crate::store::Store;

/// Operações de produto usadas pelas rotas.
/// Todo produto devolvido traz `category_name` calculado no momento da leitura.
#[async_trait]
pub trait ProdutoService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Produto>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Produto, ServiceError>;
    async fn create(&self, novo: NovoProduto) -> Result<Produto, ServiceError>;
    async fn update(&self, id: i32, novo: NovoProduto) -> Result<Produto, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// Serviço de produtos. Consulta o store de categorias somente para
/// preencher `category_name`; não valida a existência da categoria.
pub struct ProdutoServiceImpl {
    produtos: Arc<dyn Store<Produto>>,
    categorias: Arc<dyn Store<Categoria>>,
}

impl ProdutoServiceImpl {
    pub fn new(produtos: Arc<dyn Store<Produto>>, categorias: Arc<dyn Store<Categoria>>) -> Self {
        ProdutoServiceImpl { produtos, categorias }
    }

    /// Preenche `category_name` com o nome atual da categoria, ou "" quando
    /// `category_id` é 0 ou não corresponde a nenhuma categoria.
    async fn enriquecer(&self, mut produto: Produto) -> Result<Produto, ServiceError> {
        produto.category_name = if produto.category_id == 0 {
            String::new()
        } else {
            self.categorias
                .get_by_id(produto.category_id)
                .await?
                .map(|c| c.name)
                .unwrap_or_default()
        };
        Ok(produto)
    }
}

fn validar(novo: &NovoProduto) -> Result<(), ServiceError> {
    if novo.name.trim().is_empty() {
        return Err(ServiceError::Validation("Product name is required".to_string()));
    }
    if novo.price < 0 {
        return Err(ServiceError::Validation("Product price must not be negative".to_string()));
    }
    if novo.stock < 0 {
        return Err(ServiceError::Validation("Product stock must not be negative".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ProdutoService for ProdutoServiceImpl {
    async fn get_all(&self) -> Result<Vec<Produto>, ServiceError> {
        let produtos = self.produtos.get_all().await?;
        try_join_all(produtos.into_iter().map(|p| self.enriquecer(p))).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Produto, ServiceError> {
        let produto = self
            .produtos
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;
        self.enriquecer(produto).await
    }

    async fn create(&self, novo: NovoProduto) -> Result<Produto, ServiceError> {
        validar(&novo)?;
        let produto = self.produtos.insert(Produto::from_novo(0, novo)).await?;
        info!(id = produto.id, category_id = produto.category_id, "Produto cadastrado");
        self.enriquecer(produto).await
    }

    async fn update(&self, id: i32, novo: NovoProduto) -> Result<Produto, ServiceError> {
        // Id inexistente é NotFound mesmo com corpo inválido
        self.produtos
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;
        validar(&novo)?;
        // Pode ter sido removido entre a consulta e a substituição
        let produto = self
            .produtos
            .replace(Produto::from_novo(id, novo))
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;
        info!(id, "Produto atualizado");
        self.enriquecer(produto).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.produtos.remove(id).await? {
            return Err(ServiceError::not_found("Product", id));
        }
        info!(id, "Produto deletado");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorias::categoria_structs::NovaCategoria;
    use crate::store::MemoryStore;

    /// Store de categorias que sempre falha, para verificar a propagação do erro.
    struct StoreQuebrado;

    #[async_trait]
    impl Store<Categoria> for StoreQuebrado {
        async fn get_all(&self) -> Result<Vec<Categoria>, ServiceError> {
            Err(ServiceError::Store("offline".into()))
        }
        async fn get_by_id(&self, _id: i32) -> Result<Option<Categoria>, ServiceError> {
            Err(ServiceError::Store("offline".into()))
        }
        async fn insert(&self, _registro: Categoria) -> Result<Categoria, ServiceError> {
            Err(ServiceError::Store("offline".into()))
        }
        async fn replace(&self, _registro: Categoria) -> Result<Option<Categoria>, ServiceError> {
            Err(ServiceError::Store("offline".into()))
        }
        async fn remove(&self, _id: i32) -> Result<bool, ServiceError> {
            Err(ServiceError::Store("offline".into()))
        }
    }

    struct Cenario {
        produtos: ProdutoServiceImpl,
        categorias: Arc<MemoryStore<Categoria>>,
    }

    fn cenario() -> Cenario {
        let categorias = Arc::new(MemoryStore::<Categoria>::new());
        let produtos = ProdutoServiceImpl::new(Arc::new(MemoryStore::<Produto>::new()), categorias.clone());
        Cenario { produtos, categorias }
    }

    async fn categoria(c: &Cenario, name: &str) -> Categoria {
        c.categorias
            .insert(Categoria::from_nova(
                0,
                NovaCategoria { name: name.to_string(), description: String::new() },
            ))
            .await
            .unwrap()
    }

    fn novo(name: &str, category_id: i32) -> NovoProduto {
        NovoProduto {
            name: name.to_string(),
            price: 15_000_000,
            stock: 10,
            category_id,
        }
    }

    #[actix_web::test]
    async fn get_by_id_preenche_nome_da_categoria() {
        let c = cenario();
        let eletronicos = categoria(&c, "Electronics").await;
        let laptop = c.produtos.create(novo("Laptop", eletronicos.id)).await.unwrap();

        let lido = c.produtos.get_by_id(laptop.id).await.unwrap();
        assert_eq!(
            lido,
            Produto {
                id: 1,
                name: "Laptop".to_string(),
                price: 15_000_000,
                stock: 10,
                category_id: 1,
                category_name: "Electronics".to_string(),
            }
        );
    }

    #[actix_web::test]
    async fn categoria_inexistente_ou_zero_resulta_em_nome_vazio() {
        let c = cenario();
        categoria(&c, "Electronics").await;
        let misterio = c.produtos.create(novo("Mystery", 999)).await.unwrap();
        let sem_categoria = c.produtos.create(novo("Loose", 0)).await.unwrap();

        assert_eq!(c.produtos.get_by_id(misterio.id).await.unwrap().category_name, "");
        assert_eq!(c.produtos.get_by_id(sem_categoria.id).await.unwrap().category_name, "");
    }

    #[actix_web::test]
    async fn get_all_enriquece_cada_produto() {
        let c = cenario();
        let eletronicos = categoria(&c, "Electronics").await;
        let moveis = categoria(&c, "Furniture").await;
        c.produtos.create(novo("Laptop", eletronicos.id)).await.unwrap();
        c.produtos.create(novo("Chair", moveis.id)).await.unwrap();
        c.produtos.create(novo("Mystery Item", 0)).await.unwrap();

        let nomes: Vec<String> = c
            .produtos
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.category_name)
            .collect();
        assert_eq!(nomes, vec!["Electronics", "Furniture", ""]);
    }

    #[actix_web::test]
    async fn excluir_categoria_nao_altera_produto() {
        let c = cenario();
        let eletronicos = categoria(&c, "Electronics").await;
        let laptop = c.produtos.create(novo("Laptop", eletronicos.id)).await.unwrap();

        assert!(c.categorias.remove(eletronicos.id).await.unwrap());

        let lido = c.produtos.get_by_id(laptop.id).await.unwrap();
        assert_eq!(lido.category_id, eletronicos.id);
        assert_eq!(lido.category_name, "");
    }

    #[actix_web::test]
    async fn nome_da_categoria_reflete_renomeacao() {
        let c = cenario();
        let cat = categoria(&c, "Electronics").await;
        let laptop = c.produtos.create(novo("Laptop", cat.id)).await.unwrap();

        c.categorias
            .replace(Categoria { name: "Gadgets".to_string(), ..cat })
            .await
            .unwrap();

        assert_eq!(c.produtos.get_by_id(laptop.id).await.unwrap().category_name, "Gadgets");
    }

    #[actix_web::test]
    async fn update_troca_categoria() {
        let c = cenario();
        let eletronicos = categoria(&c, "Electronics").await;
        let moveis = categoria(&c, "Furniture").await;
        let laptop = c.produtos.create(novo("Laptop", eletronicos.id)).await.unwrap();

        let atualizado = c
            .produtos
            .update(laptop.id, novo("Laptop Updated", moveis.id))
            .await
            .unwrap();
        assert_eq!(atualizado.id, laptop.id);
        assert_eq!(atualizado.category_name, "Furniture");
    }

    #[actix_web::test]
    async fn validacao_rejeita_sem_gravar() {
        let c = cenario();
        let laptop = c.produtos.create(novo("Laptop", 0)).await.unwrap();

        assert!(matches!(c.produtos.create(novo("", 0)).await, Err(ServiceError::Validation(_))));
        let negativo = NovoProduto { price: -1, ..novo("X", 0) };
        assert!(matches!(c.produtos.create(negativo).await, Err(ServiceError::Validation(_))));
        let sem_estoque = NovoProduto { stock: -5, ..novo("X", 0) };
        assert!(matches!(c.produtos.create(sem_estoque).await, Err(ServiceError::Validation(_))));

        let err = c.produtos.update(laptop.id, novo("", 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(c.produtos.get_by_id(laptop.id).await.unwrap(), laptop);
        assert_eq!(c.produtos.get_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn id_inexistente_e_sempre_not_found() {
        let c = cenario();
        assert!(matches!(c.produtos.get_by_id(999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            c.produtos.update(999, novo("Laptop", 0)).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(c.produtos.delete(999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            c.produtos.update(999, novo("", 0)).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn falha_na_consulta_da_categoria_propaga_como_store() {
        let produtos = Arc::new(MemoryStore::<Produto>::new());
        let svc = ProdutoServiceImpl::new(produtos.clone(), Arc::new(StoreQuebrado));
        produtos.insert(Produto::from_novo(0, novo("Laptop", 3))).await.unwrap();

        assert!(matches!(svc.get_all().await, Err(ServiceError::Store(_))));
        assert!(matches!(svc.get_by_id(1).await, Err(ServiceError::Store(_))));
    }
}

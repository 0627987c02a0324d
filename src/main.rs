// src/main.rs

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{info, warn};

// Importa os módulos
mod categorias; // Módulo de categorias
mod config;     // Configuração via variáveis de ambiente
mod produtos;   // Módulo de produtos
mod shared;     // Módulo shared
mod store;      // Armazenamento (memória ou PostgreSQL)


use categorias::categoria_router;
use categorias::categoria_service::{CategoriaService, CategoriaServiceImpl};
use categorias::categoria_structs::Categoria;
use config::AppConfig;
use produtos::produtos_router;
use produtos::produtos_service::{ProdutoService, ProdutoServiceImpl};
use produtos::produtos_structs::Produto;
use shared::errors::ServiceError;
use shared::extractors::json_config;
use shared::fallback::rota_nao_encontrada;
use shared::logging::init_logging;
use store::postgres::{self, PgCategoriaStore, PgProdutoStore};
use store::{seed, MemoryStore, Store};

// Estado compartilhado com os serviços, montado uma única vez na inicialização.
pub struct AppState {
    pub categorias: Arc<dyn CategoriaService>,
    pub produtos: Arc<dyn ProdutoService>,
}

impl AppState {
    /// Monta os serviços sobre os stores. O serviço de produtos também recebe
    /// o store de categorias para preencher `category_name`.
    pub fn new(categorias: Arc<dyn Store<Categoria>>, produtos: Arc<dyn Store<Produto>>) -> Self {
        AppState {
            categorias: Arc::new(CategoriaServiceImpl::new(categorias.clone())),
            produtos: Arc::new(ProdutoServiceImpl::new(produtos, categorias)),
        }
    }
}

type Stores = (Arc<dyn Store<Categoria>>, Arc<dyn Store<Produto>>);

/// Escolhe o backend conforme a configuração.
async fn montar_stores(config: &AppConfig) -> Result<Stores, ServiceError> {
    match &config.database_url {
        Some(url) => {
            if config.seed_data {
                warn!("SEED_DATA ignorado: os dados de demonstração valem só para o backend em memória");
            }
            let pool = postgres::connect(url, config.database_max_connections).await?;
            postgres::prepare_schema(&pool).await?;
            info!("Usando o store PostgreSQL");
            Ok((
                Arc::new(PgCategoriaStore::new(pool.clone())),
                Arc::new(PgProdutoStore::new(pool)),
            ))
        }
        None if config.seed_data => {
            info!("Usando o store em memória com dados de demonstração");
            Ok((
                Arc::new(MemoryStore::with_records(seed::categorias_demo())),
                Arc::new(MemoryStore::with_records(seed::produtos_demo())),
            ))
        }
        None => {
            info!("Usando o store em memória");
            Ok((
                Arc::new(MemoryStore::<Categoria>::new()),
                Arc::new(MemoryStore::<Produto>::new()),
            ))
        }
    }
}

/// Rotas da API sob o prefixo `/api`.
pub fn rotas(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(categoria_router::config)
            .configure(produtos_router::config),
    );
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    init_logging(config.log_json);

    let (categorias, produtos) = montar_stores(&config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // web::Data compartilha o estado entre as workers do servidor
    let app_state = web::Data::new(AppState::new(categorias, produtos));

    info!(host = %config.host, port = config.port, "Iniciando API PDV");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .app_data(json_config())
            .configure(rotas)
            .default_service(web::to(rota_nao_encontrada))
    })
    // Vincula o servidor ao endereço IP e porta. O '?' propaga erros.
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

// src/config.rs

use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuração da aplicação lida das variáveis de ambiente (e do `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Com `DATABASE_URL` definido os dados ficam no PostgreSQL; sem ele, em memória.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Popula o backend em memória com categorias e produtos de demonstração.
    pub seed_data: bool,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Arquivo .env é opcional
        let _ = dotenvy::dotenv();
        Self::from_lookup(|nome| env::var(nome).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("APP_PORT") {
            Some(v) => parse_numero("APP_PORT", &v)?,
            None => 8080,
        };
        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse_numero("DATABASE_MAX_CONNECTIONS", &v)?,
            None => 5,
        };
        let log_json = match lookup("LOG_FORMAT") {
            Some(v) => v.trim().eq_ignore_ascii_case("json"),
            None => false,
        };

        Ok(AppConfig {
            host: lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections,
            seed_data: parse_bool("SEED_DATA", lookup("SEED_DATA"))?,
            log_json,
        })
    }
}

fn parse_numero<T: std::str::FromStr>(name: &'static str, valor: &str) -> Result<T, ConfigError> {
    valor.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: valor.to_string(),
    })
}

fn parse_bool(name: &'static str, valor: Option<String>) -> Result<bool, ConfigError> {
    let valor = match valor {
        Some(v) => v,
        None => return Ok(false),
    };
    match valor.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value: valor }),
    }
}

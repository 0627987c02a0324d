// src/shared/logging.rs

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa o subscriber do tracing.
/// - Respeita `RUST_LOG` quando definido, senão usa `info,actix_web=info`
/// - `json = true` emite logs estruturados (um objeto JSON por linha)
/// - Os logs do `middleware::Logger` do actix chegam aqui pela ponte do crate `log`
pub fn init_logging(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));

    let builder = fmt().with_env_filter(env_filter).with_writer(io::stdout);

    // try_init: chamadas repetidas (ex.: testes) não entram em pânico
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

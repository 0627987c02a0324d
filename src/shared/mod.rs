// src/shared/mod.rs

// Estruturas de resposta comuns a todos os módulos
pub mod shared_structs;
// Taxonomia de erros compartilhada por store, serviços e rotas
pub mod errors;
// Extratores de requisição (id do path e configuração do JSON)
pub mod extractors;
// Inicialização do tracing
pub mod logging;
// Respostas padrão para 404 e 405
pub mod fallback;

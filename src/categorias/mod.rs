// src/categorias/mod.rs

// Declara o submódulo que contém as definições das structs de categorias
pub mod categoria_structs;
// Declara o submódulo com o serviço de categorias
pub mod categoria_service;
// Declara o submódulo que contém as funções de rota relacionadas a categorias
pub mod categoria_router;

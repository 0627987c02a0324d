// src/store/seed.rs

use crate::categorias::categoria_structs::Categoria;
use crate::produtos::produtos_structs::Produto;

/// Categorias de demonstração carregadas quando `SEED_DATA` está ligado.
pub fn categorias_demo() -> Vec<Categoria> {
    vec![
        Categoria {
            id: 1,
            name: "Makanan".to_string(),
            description: "Produk makanan".to_string(),
        },
        Categoria {
            id: 2,
            name: "Minuman".to_string(),
            description: "Produk minuman".to_string(),
        },
    ]
}

/// Produtos de demonstração, já apontando para as categorias acima.
pub fn produtos_demo() -> Vec<Produto> {
    vec![
        Produto {
            id: 1,
            name: "Indomie Godog".to_string(),
            price: 3500,
            stock: 10,
            category_id: 1,
            category_name: String::new(),
        },
        Produto {
            id: 2,
            name: "Vit 1000ml".to_string(),
            price: 3000,
            stock: 40,
            category_id: 2,
            category_name: String::new(),
        },
    ]
}

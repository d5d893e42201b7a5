//! Seed data.

use jiff::civil::Date;

use crate::products::{Category, Product, ProductId};

/// Fallback catalog used when no persisted blob exists or the blob cannot be
/// read: one electronics and one clothing item, both active and released
/// `today`.
#[must_use]
pub fn seed_products(today: Date) -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "Laptop".to_string(),
            description: "Gaming laptop with a dedicated GPU".to_string(),
            price: 1_050_000,
            category: Category::Electronics,
            release_date: today,
            stock: 10,
            active: true,
        },
        Product {
            id: ProductId(2),
            name: "Plain T-Shirt".to_string(),
            description: "Lightweight cotton tee for warm days".to_string(),
            price: 55_000,
            category: Category::Clothing,
            release_date: today,
            stock: 100,
            active: true,
        },
    ]
}

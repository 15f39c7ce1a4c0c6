use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::Product;

/// Products with stock strictly below this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 100;

static PRODUCTS: [Product; 5] = [
    Product { id: 1, name: "Laptop", price_cents: 999_99, stock: 50 },
    Product { id: 2, name: "Smartphone", price_cents: 699_99, stock: 100 },
    Product { id: 3, name: "Headphones", price_cents: 199_99, stock: 200 },
    Product { id: 4, name: "Tablet", price_cents: 449_99, stock: 75 },
    Product { id: 5, name: "Smartwatch", price_cents: 299_99, stock: 150 },
];

#[derive(Debug, Serialize)]
pub struct InventorySummary {
    pub total_items: u64,
    pub low_stock_items: Vec<&'static Product>,
}

// ── Products ──────────────────────────────────────────────────────────────────

pub fn all_products() -> &'static [Product] {
    &PRODUCTS
}

pub fn product_by_id(id: i64) -> AppResult<&'static Product> {
    PRODUCTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

// ── Inventory ─────────────────────────────────────────────────────────────────

pub fn inventory_summary() -> InventorySummary {
    InventorySummary {
        total_items: PRODUCTS.iter().map(|p| u64::from(p.stock)).sum(),
        low_stock_items: PRODUCTS
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .collect(),
    }
}

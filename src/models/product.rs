use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;

/// Row representation of a product in the `products` table.
#[derive(Debug, Clone, Identifiable, Insertable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// Build a row for the given domain product under the given key.
    pub fn from_domain(id: String, product: &DomainProduct) -> Self {
        Self {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

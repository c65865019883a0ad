use crate::db::{DbConnection, DbPool};
use crate::domain::product::Product;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the
/// repository to be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product records.
pub trait ProductReader {
    /// List every stored product, order unspecified.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product records.
pub trait ProductWriter {
    /// Insert or fully replace a product.
    ///
    /// A fresh identifier is assigned when the incoming product carries
    /// none; otherwise the record at that id is overwritten in full.
    /// Returns the persisted value, including the assigned id.
    fn save_product(&self, product: &Product) -> RepositoryResult<Product>;
    /// Remove a product by id. Removing a missing id is not an error.
    fn delete_product(&self, id: &str) -> RepositoryResult<()>;
}

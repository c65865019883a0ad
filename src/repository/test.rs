use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::product::Product;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductReader, ProductWriter};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    products: Mutex<HashMap<String, Product>>,
}

impl TestRepository {
    pub fn new(products: Vec<Product>) -> Self {
        let products = products
            .into_iter()
            .filter_map(|p| p.id.clone().map(|id| (id, p)))
            .collect();
        Self {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Product>> {
        match self.products.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.lock().values().cloned().collect())
    }

    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        Ok(self.lock().get(id).cloned())
    }
}

impl ProductWriter for TestRepository {
    fn save_product(&self, product: &Product) -> RepositoryResult<Product> {
        let mut stored = product.clone();
        if stored.needs_id() {
            stored.id = Some(Uuid::new_v4().to_string());
        }
        if let Some(id) = &stored.id {
            self.lock().insert(id.clone(), stored.clone());
        }
        Ok(stored)
    }

    fn delete_product(&self, id: &str) -> RepositoryResult<()> {
        self.lock().remove(id);
        Ok(())
    }
}

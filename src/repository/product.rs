use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::product::Product;
use crate::models::product::Product as DbProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let item = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }
}

impl ProductWriter for DieselRepository {
    fn save_product(&self, product: &Product) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let id = match (&product.id, product.needs_id()) {
            (Some(id), false) => id.clone(),
            _ => Uuid::new_v4().to_string(),
        };
        let record = DbProduct::from_domain(id, product);

        // REPLACE INTO gives upsert-by-primary-key semantics: a new id
        // inserts, an existing id is overwritten in full.
        diesel::replace_into(products::table)
            .values(&record)
            .execute(&mut conn)?;

        Ok(record.into())
    }

    fn delete_product(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        diesel::delete(products::table.find(id)).execute(&mut conn)?;

        Ok(())
    }
}

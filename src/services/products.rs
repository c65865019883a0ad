use chrono::Utc;

use crate::domain::product::Product;
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Stamp missing timestamps on a product about to be persisted.
///
/// Both checks are independent: a caller-supplied value is always kept
/// verbatim, and `updated_at` is not refreshed when already present.
fn stamp_timestamps(product: &mut Product) {
    if product.updated_at.is_none() {
        product.updated_at = Some(Utc::now().naive_utc());
    }
    if product.created_at.is_none() {
        product.created_at = Some(Utc::now().naive_utc());
    }
}

/// Return every stored product.
///
/// Pure pass-through to the repository; repository errors are converted
/// into `ServiceError` so that the HTTP route can remain a thin wrapper.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Look up a single product by id.
///
/// A missing record is `Ok(None)`, not an error; the HTTP layer decides
/// how to represent absence.
pub fn get_product_by_id<R>(id: &str, repo: &R) -> ServiceResult<Option<Product>>
where
    R: ProductReader,
{
    match repo.get_product_by_id(id) {
        Ok(product) => Ok(product),
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a product, stamping `created_at`/`updated_at` when unset.
pub fn save_product<R>(mut product: Product, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    stamp_timestamps(&mut product);

    match repo.save_product(&product) {
        Ok(product) => Ok(product),
        Err(e) => {
            log::error!("Failed to save product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace the product stored under `id` with the incoming payload.
///
/// The existing record is only consulted for its presence: when found,
/// the incoming payload is persisted in full and the fetched record is
/// discarded without merging. Timestamps are stamped on the incoming
/// payload only when it lacks them, so a payload without `created_at`
/// gets a fresh stamp rather than inheriting the stored one. When no
/// record exists under `id`, nothing is written and `Ok(None)` is
/// returned.
pub fn update_product<R>(id: &str, incoming: Product, repo: &R) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ProductWriter,
{
    let existing = match repo.get_product_by_id(id) {
        Ok(existing) => existing,
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if existing.is_none() {
        return Ok(None);
    }

    let mut replacement = incoming;
    stamp_timestamps(&mut replacement);

    match repo.save_product(&replacement) {
        Ok(product) => Ok(Some(product)),
        Err(e) => {
            log::error!("Failed to update product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete the product stored under `id`. Deleting a missing id succeeds.
pub fn delete_product<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    match repo.delete_product(id) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

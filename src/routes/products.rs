use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::product::Product;
use crate::repository::DieselRepository;
use crate::services::products::{
    delete_product as delete_product_service, get_product_by_id as get_product_by_id_service,
    list_products as list_products_service, save_product as save_product_service,
    update_product as update_product_service,
};

#[get("/api/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/products/{id}")]
pub async fn get_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_by_id_service(&id, repo.get_ref()) {
        // A missing record serializes as a JSON `null` body with 200.
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => {
            log::error!("Failed to get product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/api/products")]
pub async fn create_product(
    product: web::Json<Product>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match save_product_service(product.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/api/products/{id}")]
pub async fn update_product(
    id: web::Path<String>,
    product: web::Json<Product>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_product_service(&id, product.into_inner(), repo.get_ref()) {
        // A missing record serializes as a JSON `null` body with 200.
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/api/products/{id}")]
pub async fn delete_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(&id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

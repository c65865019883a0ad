use actix_web::{App, HttpServer, middleware, web};
use config::{Config, ConfigError, Environment, File};

use product_catalog::db::establish_connection_pool;
use product_catalog::models::config::ServerConfig;
use product_catalog::repository::DieselRepository;
use product_catalog::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};

fn load_config() -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .set_default("database_url", "products.db")?
        .set_default("bind_address", "127.0.0.1")?
        .set_default("port", 8080)?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = load_config().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!(
        "Starting catalog service on {}:{}",
        server_config.bind_address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .wrap(middleware::Logger::default())
            .service(list_products)
            .service(get_product)
            .service(create_product)
            .service(update_product)
            .service(delete_product)
    })
    .bind((server_config.bind_address.as_str(), server_config.port))?
    .run()
    .await
}

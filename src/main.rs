use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use tropigo_api::config::{AppConfig, StoreKind};
use tropigo_api::db::memory::InMemoryLandmarkStore;
use tropigo_api::db::mongo::{create_mongo_client, MongoLandmarkStore};
use tropigo_api::db::seed::{seed_landmarks, seed_translations};
use tropigo_api::db::store::LandmarkStore;
use tropigo_api::routes::{self, health::Environment};

async fn serve<S>(config: AppConfig, store: S) -> io::Result<()>
where
    S: LandmarkStore + Send + Sync + 'static,
{
    let store = web::Data::new(store);
    let defaults = web::Data::new(config.resolver.clone());
    let environment = web::Data::new(Environment(config.environment.clone()));

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(defaults.clone())
            .app_data(environment.clone())
            .configure(routes::configure::<S>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Resolver defaults: language={}, radius={}km",
        config.resolver.language, config.resolver.radius_km
    );

    match config.store {
        StoreKind::Memory => {
            info!("Using in-memory landmark store with seed data");
            let store = InMemoryLandmarkStore::new(seed_landmarks(), seed_translations());
            serve(config, store).await
        }
        StoreKind::Mongo => {
            let uri = config.mongo_uri.clone().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "MONGODB_URI must be set")
            })?;
            let client = create_mongo_client(&uri)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            let store = MongoLandmarkStore::new(client, config.database.clone());
            serve(config, store).await
        }
    }
}

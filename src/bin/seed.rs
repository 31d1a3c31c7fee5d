use std::io;

use env_logger::Env;
use log::{error, info};

use tropigo_api::config::AppConfig;
use tropigo_api::db::mongo::{create_mongo_client, MongoLandmarkStore};
use tropigo_api::db::seed::{seed_landmarks, seed_translations};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let uri = config
        .mongo_uri
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "MONGODB_URI must be set"))?;

    let client = create_mongo_client(&uri)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let store = MongoLandmarkStore::new(client, config.database.clone());

    let landmarks = seed_landmarks();
    let translations = seed_translations();

    info!(
        "Seeding {} landmarks and {} translations into {}",
        landmarks.len(),
        translations.len(),
        config.database
    );

    match store.upsert_all(&landmarks, &translations).await {
        Ok(inserted) => {
            info!("Seed complete, {} new documents", inserted);
            Ok(())
        }
        Err(e) => {
            error!("Error seeding database: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, e))
        }
    }
}

use futures::TryStreamExt;
use log::{info, warn};
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::sync::Arc;
use std::time::Duration;

use crate::db::store::{LandmarkStore, StoreError};
use crate::models::landmark::{Landmark, LandmarkTranslation};

const LANDMARK_COLLECTION: &str = "Landmark";
const TRANSLATION_COLLECTION: &str = "LandmarkTranslation";

pub async fn create_mongo_client(uri: &str) -> mongodb::error::Result<Arc<Client>> {
    info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    // Stable API, MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    // A failed ping is not fatal, the pool reconnects lazily.
    match client.database("admin").run_command(doc! {"ping": 1}).await {
        Ok(_) => info!("Connected to MongoDB and verified with ping command"),
        Err(e) => warn!("Connected to MongoDB but ping test failed: {}", e),
    }

    Ok(Arc::new(client))
}

#[derive(Clone)]
pub struct MongoLandmarkStore {
    client: Arc<Client>,
    database: String,
}

impl MongoLandmarkStore {
    pub fn new(client: Arc<Client>, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    fn landmarks(&self) -> Collection<Landmark> {
        self.client
            .database(&self.database)
            .collection(LANDMARK_COLLECTION)
    }

    fn translations(&self) -> Collection<LandmarkTranslation> {
        self.client
            .database(&self.database)
            .collection(TRANSLATION_COLLECTION)
    }

    /// Upserts landmarks and translations by id. Returns how many documents
    /// were newly inserted.
    pub async fn upsert_all(
        &self,
        landmarks: &[Landmark],
        translations: &[LandmarkTranslation],
    ) -> Result<u64, StoreError> {
        let mut inserted = 0;

        for landmark in landmarks {
            let result = self
                .landmarks()
                .replace_one(doc! { "_id": landmark.id.as_str() }, landmark)
                .upsert(true)
                .await?;
            if result.upserted_id.is_some() {
                inserted += 1;
            }
        }

        for translation in translations {
            let result = self
                .translations()
                .replace_one(doc! { "_id": translation.id.as_str() }, translation)
                .upsert(true)
                .await?;
            if result.upserted_id.is_some() {
                inserted += 1;
            }
        }

        Ok(inserted)
    }
}

impl LandmarkStore for MongoLandmarkStore {
    async fn list_landmarks(&self) -> Result<Vec<Landmark>, StoreError> {
        let cursor = self.landmarks().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn translations_for(
        &self,
        landmark_ids: &[String],
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        if landmark_ids.is_empty() {
            return Ok(Vec::new());
        }

        let filter = doc! { "landmark_id": { "$in": landmark_ids.to_vec() } };
        let cursor = self.translations().find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_landmark(&self, id: &str) -> Result<Option<Landmark>, StoreError> {
        Ok(self.landmarks().find_one(doc! { "_id": id }).await?)
    }

    async fn translations_of(
        &self,
        landmark_id: &str,
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        let cursor = self
            .translations()
            .find(doc! { "landmark_id": landmark_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database(&self.database)
            .run_command(doc! {"ping": 1})
            .await?;
        Ok(())
    }
}

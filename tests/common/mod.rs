use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use tropigo_api::db::memory::InMemoryLandmarkStore;
use tropigo_api::db::seed::{seed_landmarks, seed_translations};
use tropigo_api::db::store::{LandmarkStore, StoreError};
use tropigo_api::models::landmark::{
    Landmark, LandmarkCategory, LandmarkTranslation,
};
use tropigo_api::routes::{self, health::Environment};
use tropigo_api::services::landmark_service::ResolverDefaults;

pub struct TestApp<S> {
    pub store: S,
    pub defaults: ResolverDefaults,
}

impl TestApp<InMemoryLandmarkStore> {
    /// App backed by the seed data set.
    pub fn seeded() -> Self {
        Self::with_store(InMemoryLandmarkStore::new(
            seed_landmarks(),
            seed_translations(),
        ))
    }
}

impl<S: LandmarkStore + Clone + 'static> TestApp<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            defaults: ResolverDefaults::default(),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(self.defaults.clone()))
            .app_data(web::Data::new(Environment("test".to_string())))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure::<S>)
    }
}

/// Store whose every read fails.
#[derive(Clone)]
pub struct BrokenStore;

impl LandmarkStore for BrokenStore {
    async fn list_landmarks(&self) -> Result<Vec<Landmark>, StoreError> {
        Err(StoreError("connection refused".to_string()))
    }

    async fn translations_for(
        &self,
        _landmark_ids: &[String],
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        Err(StoreError("connection refused".to_string()))
    }

    async fn find_landmark(&self, _id: &str) -> Result<Option<Landmark>, StoreError> {
        Err(StoreError("connection refused".to_string()))
    }

    async fn translations_of(
        &self,
        _landmark_id: &str,
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        Err(StoreError("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError("connection refused".to_string()))
    }
}

/// Store that lists and finds landmarks but fails every translation read.
#[derive(Clone)]
pub struct TranslationsDownStore(pub InMemoryLandmarkStore);

impl LandmarkStore for TranslationsDownStore {
    async fn list_landmarks(&self) -> Result<Vec<Landmark>, StoreError> {
        self.0.list_landmarks().await
    }

    async fn translations_for(
        &self,
        _landmark_ids: &[String],
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        Err(StoreError("translation collection unavailable".to_string()))
    }

    async fn find_landmark(&self, id: &str) -> Result<Option<Landmark>, StoreError> {
        self.0.find_landmark(id).await
    }

    async fn translations_of(
        &self,
        _landmark_id: &str,
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        Err(StoreError("translation collection unavailable".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub fn bridge_view_store() -> InMemoryLandmarkStore {
    InMemoryLandmarkStore::new(
        vec![Landmark {
            id: "bridge".to_string(),
            category: LandmarkCategory::Viewpoint,
            latitude: 4.1756,
            longitude: 73.5328,
            default_language: "en".to_string(),
            name: "Sinamale Bridge".to_string(),
            is_featured: true,
            created_at: None,
        }],
        vec![LandmarkTranslation {
            id: "bridge-en".to_string(),
            landmark_id: "bridge".to_string(),
            language: "en".to_string(),
            name: "Bridge View".to_string(),
            description: "Lookout over the bridge".to_string(),
        }],
    )
}

use std::fmt;

use crate::models::landmark::{Landmark, LandmarkTranslation};

#[derive(Debug, Clone)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage error: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError(err.to_string())
    }
}

/// Read access to landmarks and their translations.
pub trait LandmarkStore {
    /// All landmarks, in storage order.
    async fn list_landmarks(&self) -> Result<Vec<Landmark>, StoreError>;

    async fn translations_for(
        &self,
        landmark_ids: &[String],
    ) -> Result<Vec<LandmarkTranslation>, StoreError>;

    async fn find_landmark(&self, id: &str) -> Result<Option<Landmark>, StoreError>;

    async fn translations_of(
        &self,
        landmark_id: &str,
    ) -> Result<Vec<LandmarkTranslation>, StoreError>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), StoreError>;
}

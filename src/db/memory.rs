use crate::db::store::{LandmarkStore, StoreError};
use crate::models::landmark::{Landmark, LandmarkTranslation};

/// Landmark store backed by plain vectors, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLandmarkStore {
    landmarks: Vec<Landmark>,
    translations: Vec<LandmarkTranslation>,
}

impl InMemoryLandmarkStore {
    pub fn new(landmarks: Vec<Landmark>, translations: Vec<LandmarkTranslation>) -> Self {
        Self {
            landmarks,
            translations,
        }
    }
}

impl LandmarkStore for InMemoryLandmarkStore {
    async fn list_landmarks(&self) -> Result<Vec<Landmark>, StoreError> {
        Ok(self.landmarks.clone())
    }

    async fn translations_for(
        &self,
        landmark_ids: &[String],
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        Ok(self
            .translations
            .iter()
            .filter(|t| landmark_ids.contains(&t.landmark_id))
            .cloned()
            .collect())
    }

    async fn find_landmark(&self, id: &str) -> Result<Option<Landmark>, StoreError> {
        Ok(self.landmarks.iter().find(|l| l.id == id).cloned())
    }

    async fn translations_of(
        &self,
        landmark_id: &str,
    ) -> Result<Vec<LandmarkTranslation>, StoreError> {
        Ok(self
            .translations
            .iter()
            .filter(|t| t.landmark_id == landmark_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::{seed_landmarks, seed_translations};

    fn store() -> InMemoryLandmarkStore {
        InMemoryLandmarkStore::new(seed_landmarks(), seed_translations())
    }

    #[actix_rt::test]
    async fn test_translations_filtered_by_landmark_ids() {
        let store = store();
        let ids = vec!["sinamale-bridge".to_string()];

        let translations = store.translations_for(&ids).await.unwrap();
        assert!(!translations.is_empty());
        assert!(translations.iter().all(|t| t.landmark_id == "sinamale-bridge"));
    }

    #[actix_rt::test]
    async fn test_empty_id_set_yields_no_translations() {
        let translations = store().translations_for(&[]).await.unwrap();
        assert!(translations.is_empty());
    }

    #[actix_rt::test]
    async fn test_find_missing_landmark() {
        assert!(store().find_landmark("nowhere").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_list_keeps_insertion_order() {
        let store = store();
        let ids: Vec<String> = store
            .list_landmarks()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        let expected: Vec<String> = seed_landmarks().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, expected);
    }
}

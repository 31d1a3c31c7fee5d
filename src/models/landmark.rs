use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkCategory {
    Historic,
    Cultural,
    Viewpoint,
    Special,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Landmark {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: LandmarkCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub default_language: String,
    /// Shown when no translation exists at all.
    pub name: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LandmarkTranslation {
    #[serde(rename = "_id")]
    pub id: String,
    pub landmark_id: String,
    pub language: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A landmark merged with its display translation, as returned by the API.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLandmark {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Language of the translation actually used.
    pub language: String,
    pub category: LandmarkCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub default_language: String,
    pub is_featured: bool,
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Landmark {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

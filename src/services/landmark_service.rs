use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::debug;

use crate::db::store::{LandmarkStore, StoreError};
use crate::models::landmark::{GeoPoint, Landmark, LandmarkTranslation, ResolvedLandmark};
use crate::services::distance_service::DistanceService;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

#[derive(Debug)]
pub enum LandmarkError {
    NotFound,
    Internal(String),
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::NotFound => write!(f, "Landmark not found"),
            LandmarkError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for LandmarkError {}

impl From<StoreError> for LandmarkError {
    fn from(err: StoreError) -> Self {
        LandmarkError::Internal(err.to_string())
    }
}

/// Fallbacks applied when a request leaves out or garbles a parameter.
#[derive(Debug, Clone)]
pub struct ResolverDefaults {
    pub language: String,
    pub radius_km: f64,
}

impl Default for ResolverDefaults {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// A normalized nearby-landmarks request.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkQuery {
    pub point: Option<GeoPoint>,
    pub radius_km: f64,
    pub language: String,
}

impl LandmarkQuery {
    /// Builds a query from raw request values. Nothing here fails: malformed
    /// values fall back to `defaults`, and a point needs both coordinates.
    pub fn from_raw(
        lat: Option<&str>,
        lng: Option<&str>,
        radius: Option<&str>,
        language: Option<&str>,
        defaults: &ResolverDefaults,
    ) -> Self {
        Self {
            point: parse_point(lat, lng),
            radius_km: parse_radius(radius, defaults.radius_km),
            language: normalize_language(language, &defaults.language),
        }
    }
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

pub fn parse_point(lat: Option<&str>, lng: Option<&str>) -> Option<GeoPoint> {
    Some(GeoPoint::new(parse_coordinate(lat)?, parse_coordinate(lng)?))
}

pub fn parse_radius(raw: Option<&str>, default_km: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(default_km)
}

/// Reduces a language preference such as `"en-US,fr;q=0.8"` to its primary
/// subtag (`"en"`).
pub fn normalize_language(raw: Option<&str>, default: &str) -> String {
    raw.and_then(|value| {
        let first = value.split(',').next()?;
        let tag = first.split(';').next()?.trim();
        let primary = tag.split(['-', '_']).next()?.trim();

        if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(primary.to_ascii_lowercase())
    })
    .unwrap_or_else(|| default.to_string())
}

/// Translations of a single landmark keyed by language code.
pub type TranslationMap = BTreeMap<String, LandmarkTranslation>;

pub fn group_translations(
    translations: Vec<LandmarkTranslation>,
) -> HashMap<String, TranslationMap> {
    let mut grouped: HashMap<String, TranslationMap> = HashMap::new();
    for translation in translations {
        grouped
            .entry(translation.landmark_id.clone())
            .or_default()
            .entry(translation.language.clone())
            .or_insert(translation);
    }
    grouped
}

/// Picks the translation to display: the requested language, then the
/// landmark's default language, then the smallest language code available.
pub fn select_translation<'a>(
    translations: &'a TranslationMap,
    requested: &str,
    default_language: &str,
) -> Option<&'a LandmarkTranslation> {
    [requested, default_language]
        .into_iter()
        .find_map(|language| translations.get(language))
        .or_else(|| translations.values().next())
}

pub fn resolve_landmark(
    landmark: Landmark,
    translations: &TranslationMap,
    language: &str,
    point: Option<GeoPoint>,
) -> ResolvedLandmark {
    let distance_km = point.map(|p| DistanceService::haversine_km(p, landmark.position()));

    let (name, description, language) =
        match select_translation(translations, language, &landmark.default_language) {
            Some(t) => (
                t.name.clone(),
                Some(t.description.clone()),
                t.language.clone(),
            ),
            None => (landmark.name, None, landmark.default_language.clone()),
        };

    ResolvedLandmark {
        id: landmark.id,
        name,
        description,
        language,
        category: landmark.category,
        latitude: landmark.latitude,
        longitude: landmark.longitude,
        default_language: landmark.default_language,
        is_featured: landmark.is_featured,
        distance_km,
        created_at: landmark.created_at,
    }
}

/// Unknown distances sort after every known one.
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Landmarks within `query.radius_km` of `query.point`, nearest first. Without
/// a point every landmark is returned in storage order.
pub async fn resolve<S: LandmarkStore>(
    store: &S,
    query: &LandmarkQuery,
) -> Result<Vec<ResolvedLandmark>, LandmarkError> {
    let landmarks = store.list_landmarks().await?;

    let ids: Vec<String> = landmarks.iter().map(|l| l.id.clone()).collect();
    let translations = if ids.is_empty() {
        Vec::new()
    } else {
        store.translations_for(&ids).await?
    };
    let mut grouped = group_translations(translations);

    let mut resolved: Vec<ResolvedLandmark> = landmarks
        .into_iter()
        .map(|landmark| {
            let translations = grouped.remove(&landmark.id).unwrap_or_default();
            resolve_landmark(landmark, &translations, &query.language, query.point)
        })
        // distance is only unknown when no point was given
        .filter(|landmark| {
            landmark
                .distance_km
                .map_or(true, |distance| distance <= query.radius_km)
        })
        .collect();

    if query.point.is_some() {
        resolved.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
    }

    debug!(
        "Resolved {} landmarks (lang={}, radius={}km, point={:?})",
        resolved.len(),
        query.language,
        query.radius_km,
        query.point
    );

    Ok(resolved)
}

/// A single landmark in the requested language. Distance is only filled in
/// when `point` is given; no radius applies.
pub async fn resolve_one<S: LandmarkStore>(
    store: &S,
    id: &str,
    language: &str,
    point: Option<GeoPoint>,
) -> Result<ResolvedLandmark, LandmarkError> {
    let landmark = store
        .find_landmark(id)
        .await?
        .ok_or(LandmarkError::NotFound)?;

    let translations = store.translations_of(&landmark.id).await?;
    let by_language: TranslationMap = group_translations(translations)
        .remove(&landmark.id)
        .unwrap_or_default();

    Ok(resolve_landmark(landmark, &by_language, language, point))
}

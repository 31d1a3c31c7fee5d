//! Landmarks around Malé and the nearby islands, used to populate a fresh
//! database and the in-memory store.

use crate::models::landmark::{Landmark, LandmarkCategory, LandmarkTranslation};

fn landmark(
    id: &str,
    category: LandmarkCategory,
    latitude: f64,
    longitude: f64,
    name: &str,
    is_featured: bool,
) -> Landmark {
    Landmark {
        id: id.to_string(),
        category,
        latitude,
        longitude,
        default_language: "en".to_string(),
        name: name.to_string(),
        is_featured,
        created_at: None,
    }
}

fn translation(landmark_id: &str, language: &str, name: &str, description: &str) -> LandmarkTranslation {
    LandmarkTranslation {
        id: format!("{}-{}", landmark_id, language),
        landmark_id: landmark_id.to_string(),
        language: language.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn seed_landmarks() -> Vec<Landmark> {
    vec![
        landmark(
            "hukuru-miskiy",
            LandmarkCategory::Historic,
            4.1781,
            73.5094,
            "Old Friday Mosque",
            true,
        ),
        landmark(
            "national-museum",
            LandmarkCategory::Cultural,
            4.1774,
            73.5107,
            "National Museum",
            false,
        ),
        landmark(
            "republic-square",
            LandmarkCategory::Special,
            4.1769,
            73.5092,
            "Republic Square",
            false,
        ),
        landmark(
            "artificial-beach",
            LandmarkCategory::Viewpoint,
            4.1732,
            73.5146,
            "Artificial Beach",
            false,
        ),
        landmark(
            "sinamale-bridge",
            LandmarkCategory::Viewpoint,
            4.1756,
            73.5328,
            "Sinamale Bridge",
            true,
        ),
        landmark(
            "hulhumale-beach",
            LandmarkCategory::Viewpoint,
            4.2160,
            73.5416,
            "Hulhumale Beach",
            false,
        ),
        landmark(
            "maafushi-harbour",
            LandmarkCategory::Other,
            3.9417,
            73.4897,
            "Maafushi Harbour",
            false,
        ),
    ]
}

pub fn seed_translations() -> Vec<LandmarkTranslation> {
    vec![
        translation(
            "hukuru-miskiy",
            "en",
            "Old Friday Mosque",
            "Coral stone mosque from 1658 with intricate lacquer and carved interiors.",
        ),
        translation(
            "hukuru-miskiy",
            "dv",
            "ހުކުރު މިސްކިތް",
            "1658 ވަނަ އަހަރު ހިރިގާއިން ބިނާކުރެވުނު މިސްކިތް.",
        ),
        translation(
            "hukuru-miskiy",
            "de",
            "Alte Freitagsmoschee",
            "Korallensteinmoschee aus dem Jahr 1658 mit kunstvollen Schnitzereien.",
        ),
        translation(
            "national-museum",
            "en",
            "National Museum",
            "Royal artefacts and Buddhist-era relics of the Maldives.",
        ),
        translation(
            "national-museum",
            "ru",
            "Национальный музей",
            "Королевские артефакты и реликвии буддийской эпохи Мальдив.",
        ),
        translation(
            "republic-square",
            "en",
            "Republic Square",
            "Waterfront square with the national flag, busy in the evenings.",
        ),
        translation(
            "artificial-beach",
            "en",
            "Artificial Beach",
            "The capital's only swimming beach, popular for sunset walks.",
        ),
        translation(
            "artificial-beach",
            "zh",
            "人工海滩",
            "首都唯一可以游泳的海滩，适合傍晚散步。",
        ),
        translation(
            "sinamale-bridge",
            "en",
            "Bridge View",
            "Lookout over the China-Maldives Friendship Bridge linking Malé and Hulhulé.",
        ),
        translation(
            "hulhumale-beach",
            "en",
            "Hulhumale Beach",
            "Long public beach on the reclaimed island, good for snorkeling.",
        ),
        translation(
            "hulhumale-beach",
            "dv",
            "ހުޅުމާލޭ ގޮނޑުދޮށް",
            "ހުޅުމާލޭގެ އާންމު ގޮނޑުދޮށް.",
        ),
    ]
}

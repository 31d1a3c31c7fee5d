use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use log::error;
use serde::Deserialize;

use crate::db::store::LandmarkStore;
use crate::models::api_response::ApiResponse;
use crate::models::landmark::ResolvedLandmark;
use crate::services::landmark_service::{
    normalize_language, parse_point, resolve, resolve_one, LandmarkError, LandmarkQuery,
    ResolverDefaults,
};

/// Raw query string. Everything is kept as text so bad numbers fall back to
/// defaults instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    lat: Option<String>,
    lng: Option<String>,
    radius: Option<String>,
    lang: Option<String>,
}

/// `lang` from the query string, else the `Accept-Language` header.
fn requested_language<'a>(req: &'a HttpRequest, params: &'a QueryParams) -> Option<&'a str> {
    params
        .lang
        .as_deref()
        .filter(|lang| !lang.trim().is_empty())
        .or_else(|| {
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok())
        })
}

/*
    /api/landmarks?lat=&lng=&radius=&lang=
*/
pub async fn get_landmarks<S: LandmarkStore + 'static>(
    req: HttpRequest,
    store: web::Data<S>,
    defaults: web::Data<ResolverDefaults>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let query = LandmarkQuery::from_raw(
        params.lat.as_deref(),
        params.lng.as_deref(),
        params.radius.as_deref(),
        requested_language(&req, &params),
        &defaults,
    );

    match resolve(store.get_ref(), &query).await {
        Ok(landmarks) => HttpResponse::Ok().json(ApiResponse::ok(landmarks)),
        Err(err) => {
            error!("Failed to fetch landmarks: {}", err);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<ResolvedLandmark>>::failure("Failed to fetch landmarks"))
        }
    }
}

/*
    /api/landmarks/{id}?lang=&lat=&lng=
*/
pub async fn get_landmark_by_id<S: LandmarkStore + 'static>(
    req: HttpRequest,
    path: web::Path<String>,
    store: web::Data<S>,
    defaults: web::Data<ResolverDefaults>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let id = path.into_inner();
    let language = normalize_language(requested_language(&req, &params), &defaults.language);
    let point = parse_point(params.lat.as_deref(), params.lng.as_deref());

    match resolve_one(store.get_ref(), &id, &language, point).await {
        Ok(landmark) => HttpResponse::Ok().json(ApiResponse::ok(landmark)),
        Err(LandmarkError::NotFound) => HttpResponse::NotFound()
            .json(ApiResponse::<ResolvedLandmark>::failure("Landmark not found")),
        Err(err) => {
            error!("Failed to fetch landmark {}: {}", id, err);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<ResolvedLandmark>::failure("Failed to fetch landmark"))
        }
    }
}

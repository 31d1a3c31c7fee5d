use actix_web::web;

use crate::db::store::LandmarkStore;

pub mod health;
pub mod landmark;

/// Registers every route. The store, `ResolverDefaults` and `health::Environment`
/// must be provided as app data.
pub fn configure<S: LandmarkStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check::<S>))
        .service(
            web::scope("/api").service(
                web::scope("/landmarks")
                    .route("", web::get().to(landmark::get_landmarks::<S>))
                    .route("/{id}", web::get().to(landmark::get_landmark_by_id::<S>)),
            ),
        );
}

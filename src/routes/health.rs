use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;
use std::collections::HashMap;

use crate::db::store::LandmarkStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/// Name of the running environment, reported by `/health`.
#[derive(Debug, Clone)]
pub struct Environment(pub String);

pub async fn health_check<S: LandmarkStore + 'static>(
    store: web::Data<S>,
    environment: web::Data<Environment>,
) -> impl Responder {
    let store_result = check_store(store.get_ref()).await;

    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: environment.0.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if store_result.status != "ok" {
        health.status = "degraded".to_string();
    }
    health.services.insert("store".to_string(), store_result);

    HttpResponse::Ok().json(health)
}

async fn check_store<S: LandmarkStore>(store: &S) -> ServiceStatus {
    match store.ping().await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Landmark store reachable".to_string()),
        },
        Err(e) => {
            error!("Landmark store health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to reach store: {}", e)),
            }
        }
    }
}

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, cards, certificates, health, lookup, uploads};
use crate::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Public verification surface
        .route(
            "/api/lookup/reference/{reference_no}",
            get(lookup::by_reference),
        )
        .route(
            "/api/lookup/certificate/{certificate_no}",
            get(lookup::by_certificate),
        )
        .route(
            "/api/certificates/reference/{reference_no}/card",
            get(cards::download_by_reference),
        )
        // Admin surface
        .route("/api/admin/login", post(auth::login))
        .route(
            "/api/certificates",
            get(certificates::list).post(certificates::create),
        )
        .route(
            "/api/certificates/{id}",
            put(certificates::update).delete(certificates::remove),
        )
        .route("/api/uploads/signature", post(uploads::signature))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

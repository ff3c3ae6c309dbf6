pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

use certforge_service::CertService;

#[derive(Clone)]
pub struct AppState {
    pub service: CertService,
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `customers` - `/owners/*`, `/petTypes`
//! - `vets`      - `/vets`
//! - `visits`    - `/owners/{ownerId}/pets/{petId}/visits`, `/pets/visits`
//! - `all`       - the three merged on one listener
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::tracing;
use crate::api::routes::{customers_routes, vets_routes, visits_routes};
use crate::config::ServiceKind;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes served by `service`, without middleware.
pub fn service_routes(service: ServiceKind) -> Router<AppState> {
    match service {
        ServiceKind::Customers => customers_routes(),
        ServiceKind::Vets => vets_routes(),
        ServiceKind::Visits => visits_routes(),
        ServiceKind::All => customers_routes()
            .merge(vets_routes())
            .merge(visits_routes()),
    }
}

/// Builds the router for `service` with all middleware applied.
pub fn app_router(state: AppState, service: ServiceKind) -> NormalizePath<Router> {
    let router = service_routes(service)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

//! Route tables, one per service.
//!
//! [`crate::routes::app_router`] mounts one of these, or all three merged.

use crate::api::handlers::{
    create_owner_handler, create_pet_handler, create_visit_handler, find_owner_handler,
    find_pet_handler, list_owners_handler, list_pet_types_handler, list_vets_handler,
    update_owner_handler, update_pet_handler, visits_batch_handler, visits_for_pet_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Owner and pet records.
///
/// # Endpoints
///
/// - `GET  /owners`                           - List owners
/// - `POST /owners`                           - Create an owner
/// - `GET  /owners/{ownerId}`                 - Read an owner
/// - `PUT  /owners/{ownerId}`                 - Update an owner
/// - `POST /owners/{ownerId}/pets`            - Add a pet
/// - `GET  /owners/{ownerId}/pets/{petId}`    - Read a pet
/// - `PUT  /owners/{ownerId}/pets/{petId}`    - Update a pet
/// - `GET  /petTypes`                         - List pet types
pub fn customers_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/owners",
            get(list_owners_handler).post(create_owner_handler),
        )
        .route(
            "/owners/{ownerId}",
            get(find_owner_handler).put(update_owner_handler),
        )
        .route("/owners/{ownerId}/pets", post(create_pet_handler))
        .route(
            "/owners/{ownerId}/pets/{petId}",
            get(find_pet_handler).put(update_pet_handler),
        )
        .route("/petTypes", get(list_pet_types_handler))
}

/// Vet directory.
///
/// - `GET /vets` - List vets with specialties
pub fn vets_routes() -> Router<AppState> {
    Router::new().route("/vets", get(list_vets_handler))
}

/// Visit log.
///
/// - `GET  /owners/{ownerId}/pets/{petId}/visits` - Visits of one pet
/// - `POST /owners/{ownerId}/pets/{petId}/visits` - Record a visit
/// - `GET  /pets/visits?petId=1,2`                - Visits of several pets
pub fn visits_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/owners/{ownerId}/pets/{petId}/visits",
            get(visits_for_pet_handler).post(create_visit_handler),
        )
        .route("/pets/visits", get(visits_batch_handler))
}

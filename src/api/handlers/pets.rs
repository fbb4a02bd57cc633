//! Handlers for pet and pet type endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::path::{OwnerPath, PetPath};
use crate::api::dto::pet::{PetDetails, PetRequest, PetTypeItem};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all pet types.
///
/// # Endpoint
///
/// `GET /petTypes`
pub async fn list_pet_types_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetTypeItem>>, AppError> {
    let types = state.pet_service.list_pet_types().await?;

    Ok(Json(types.iter().map(PetTypeItem::from).collect()))
}

/// Adds a pet to an owner.
///
/// # Endpoint
///
/// `POST /owners/{ownerId}/pets`
///
/// An unknown `typeId` leaves the pet without a type.
///
/// # Errors
///
/// Returns 400 if `ownerId` is below 1 or the body fails validation.
/// Returns 404 if the owner does not exist.
pub async fn create_pet_handler(
    Path(path): Path<OwnerPath>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PetRequest>,
) -> Result<(StatusCode, Json<PetDetails>), AppError> {
    path.validate()?;

    let pet = state
        .pet_service
        .create_pet(path.owner_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(PetDetails::from(&pet))))
}

/// Overwrites a pet's name, birth date and type.
///
/// # Endpoint
///
/// `PUT /owners/{ownerId}/pets/{petId}`
///
/// The pet is looked up by `petId` alone. Responds 204 with no body.
///
/// # Errors
///
/// Returns 400 if `petId` is below 1 or the body fails validation.
/// Returns 404 if the pet does not exist.
pub async fn update_pet_handler(
    Path(path): Path<PetPath>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PetRequest>,
) -> Result<StatusCode, AppError> {
    path.validate()?;

    state
        .pet_service
        .update_pet(path.pet_id, payload.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reads one pet with its owner's name.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}/pets/{petId}`
///
/// # Errors
///
/// Returns 400 if `petId` is below 1.
/// Returns 404 if the pet does not exist.
pub async fn find_pet_handler(
    Path(path): Path<PetPath>,
    State(state): State<AppState>,
) -> Result<Json<PetDetails>, AppError> {
    path.validate()?;

    let pet = state.pet_service.find_pet(path.pet_id).await?;

    Ok(Json(PetDetails::from(&pet)))
}

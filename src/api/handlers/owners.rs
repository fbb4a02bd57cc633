//! Handlers for owner endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::owner::{OwnerItem, OwnerRequest};
use crate::api::dto::path::OwnerPath;
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an owner.
///
/// # Endpoint
///
/// `POST /owners`
///
/// # Errors
///
/// Returns 400 if any field fails validation; nothing is stored.
pub async fn create_owner_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OwnerRequest>,
) -> Result<(StatusCode, Json<OwnerItem>), AppError> {

    let owner = state.owner_service.create_owner(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(OwnerItem::from(&owner))))
}

/// Reads one owner with their pets.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}`
///
/// # Errors
///
/// Returns 400 if `ownerId` is below 1.
/// Returns 404 if the owner does not exist.
pub async fn find_owner_handler(
    Path(path): Path<OwnerPath>,
    State(state): State<AppState>,
) -> Result<Json<OwnerItem>, AppError> {
    path.validate()?;

    let owner = state.owner_service.find_owner(path.owner_id).await?;

    Ok(Json(OwnerItem::from(&owner)))
}

/// Lists every owner.
///
/// # Endpoint
///
/// `GET /owners`
pub async fn list_owners_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OwnerItem>>, AppError> {
    let owners = state.owner_service.list_owners().await?;

    Ok(Json(owners.iter().map(OwnerItem::from).collect()))
}

/// Overwrites an owner's fields.
///
/// # Endpoint
///
/// `PUT /owners/{ownerId}`
///
/// Responds 204 with no body.
///
/// # Errors
///
/// Returns 400 if `ownerId` is below 1 or the body fails validation.
/// Returns 404 if the owner does not exist.
pub async fn update_owner_handler(
    Path(path): Path<OwnerPath>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OwnerRequest>,
) -> Result<StatusCode, AppError> {
    path.validate()?;

    state
        .owner_service
        .update_owner(path.owner_id, payload.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

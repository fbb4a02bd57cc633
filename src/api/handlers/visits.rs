//! Handlers for visit endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::path::PetPath;
use crate::api::dto::visit::{VisitItem, VisitRequest, VisitsQuery, VisitsResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Records a visit for a pet.
///
/// # Endpoint
///
/// `POST /owners/{ownerId}/pets/{petId}/visits`
///
/// The owner segment is not checked. A missing `date` means today.
///
/// # Errors
///
/// Returns 400 if `petId` is below 1 or the description is too long.
pub async fn create_visit_handler(
    Path(path): Path<PetPath>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VisitRequest>,
) -> Result<(StatusCode, Json<VisitItem>), AppError> {
    path.validate()?;

    let visit = state
        .visit_service
        .create_visit(path.pet_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(VisitItem::from(visit))))
}

/// Lists the visits of one pet.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}/pets/{petId}/visits`
pub async fn visits_for_pet_handler(
    Path(path): Path<PetPath>,
    State(state): State<AppState>,
) -> Result<Json<Vec<VisitItem>>, AppError> {
    let visits = state.visit_service.visits_for_pet(path.pet_id).await?;

    Ok(Json(visits.into_iter().map(VisitItem::from).collect()))
}

/// Lists the visits of several pets at once.
///
/// # Endpoint
///
/// `GET /pets/visits?petId=111,222`
///
/// # Response
///
/// ```json
/// { "items": [ { "id": 1, "date": "2013-01-01", "description": "rabies shot", "petId": 111 } ] }
/// ```
pub async fn visits_batch_handler(
    Query(query): Query<VisitsQuery>,
    State(state): State<AppState>,
) -> Result<Json<VisitsResponse>, AppError> {
    let visits = state.visit_service.visits_for_pets(&query.pet_id).await?;

    Ok(Json(VisitsResponse {
        items: visits.into_iter().map(VisitItem::from).collect(),
    }))
}

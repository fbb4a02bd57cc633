//! Handler for the vet directory.

use axum::{Json, extract::State};

use crate::api::dto::vet::VetItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every vet with their specialties.
///
/// # Endpoint
///
/// `GET /vets`
pub async fn list_vets_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VetItem>>, AppError> {
    let vets = state.vet_service.list_vets().await?;

    Ok(Json(vets.iter().map(VetItem::from).collect()))
}

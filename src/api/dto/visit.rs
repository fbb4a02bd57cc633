//! DTOs for visit endpoints, including the multi-pet query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::formats::CommaSeparator;
use serde_with::{StringWithSeparator, serde_as};
use validator::Validate;

use crate::domain::entities::Visit;

/// Request body for recording a visit.
///
/// A pet id in the body is ignored; the one from the path wins.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(max = 8192))]
    pub description: Option<String>,

    pub pet_id: Option<i32>,
}

impl From<VisitRequest> for Visit {
    fn from(request: VisitRequest) -> Self {
        let mut visit = Visit::new();
        if request.date.is_some() {
            visit.date = request.date;
        }
        visit.description = request.description;
        visit.pet_id = request.pet_id;
        visit
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitItem {
    pub id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pet_id: Option<i32>,
}

impl From<Visit> for VisitItem {
    fn from(visit: Visit) -> Self {
        VisitItem {
            id: visit.id,
            date: visit.date,
            description: visit.description,
            pet_id: visit.pet_id,
        }
    }
}

/// Envelope for the multi-pet query.
#[derive(Debug, Serialize)]
pub struct VisitsResponse {
    pub items: Vec<VisitItem>,
}

/// `?petId=111,222`
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitsQuery {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, i32>")]
    pub pet_id: Vec<i32>,
}

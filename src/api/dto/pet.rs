//! DTOs for pet and pet type endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Pet, PetForm, PetType};

/// Request body for creating or updating a pet.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    pub birth_date: Option<NaiveDate>,

    #[validate(required)]
    pub type_id: Option<i32>,
}

impl From<PetRequest> for PetForm {
    fn from(request: PetRequest) -> Self {
        PetForm {
            name: request.name,
            birth_date: request.birth_date,
            type_id: request.type_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PetTypeItem {
    pub id: Option<i32>,
    pub name: String,
}

impl From<&PetType> for PetTypeItem {
    fn from(pet_type: &PetType) -> Self {
        PetTypeItem {
            id: pet_type.id,
            name: pet_type.name.clone(),
        }
    }
}

/// Pet as nested inside an owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetItem {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeItem>,
}

impl From<&Pet> for PetItem {
    fn from(pet: &Pet) -> Self {
        PetItem {
            id: pet.id,
            name: pet.name.clone(),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type.as_ref().map(PetTypeItem::from),
        }
    }
}

/// Standalone pet with its owner's display name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetails {
    pub id: Option<i32>,
    pub name: String,
    pub owner: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeItem>,
}

impl From<&Pet> for PetDetails {
    fn from(pet: &Pet) -> Self {
        PetDetails {
            id: pet.id,
            name: pet.name.clone(),
            owner: pet.owner().map(|o| o.display_name()).unwrap_or_default(),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type.as_ref().map(PetTypeItem::from),
        }
    }
}

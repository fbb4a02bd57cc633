//! DTOs for owner endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use super::pet::PetItem;
use crate::domain::entities::{Owner, OwnerForm};

/// Telephone numbers are 1 to 12 digits.
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,12}$").unwrap());

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Request body for creating or updating an owner.
///
/// Missing fields deserialize as empty strings and fail validation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub address: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub city: String,

    #[serde(default)]
    #[validate(regex(path = *TELEPHONE_REGEX, message = "must be 1 to 12 digits"))]
    pub telephone: String,
}

impl From<OwnerRequest> for OwnerForm {
    fn from(request: OwnerRequest) -> Self {
        OwnerForm {
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            city: request.city,
            telephone: request.telephone,
        }
    }
}

/// Owner with their pets, sorted by pet name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerItem {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<PetItem>,
}

impl From<&Owner> for OwnerItem {
    fn from(owner: &Owner) -> Self {
        OwnerItem {
            id: owner.id,
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
            pets: owner.pets().iter().map(PetItem::from).collect(),
        }
    }
}

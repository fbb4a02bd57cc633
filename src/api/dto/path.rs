//! Path parameters shared by the owner, pet and visit routes.

use serde::Deserialize;
use validator::Validate;

/// `/owners/{ownerId}`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPath {
    #[validate(range(min = 1, message = "Owner id must be positive"))]
    pub owner_id: i32,
}

/// `/owners/{ownerId}/pets/{petId}`
///
/// The owner segment is accepted as-is and never used for lookups, so it is
/// kept as a raw string.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetPath {
    pub owner_id: String,

    #[validate(range(min = 1, message = "Pet id must be positive"))]
    pub pet_id: i32,
}

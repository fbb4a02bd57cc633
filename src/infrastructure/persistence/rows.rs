//! Row types shared by the customers repositories.

use chrono::NaiveDate;

use crate::domain::entities::{Owner, Pet, PetType};

pub(super) const OWNER_COLUMNS: &str = "id, first_name, last_name, address, city, telephone";

pub(super) const PET_SELECT: &str = r#"
    SELECT p.id, p.name, p.birth_date, p.owner_id, t.id AS type_id, t.name AS type_name
    FROM pets p
    LEFT JOIN types t ON t.id = p.type_id
"#;

#[derive(Debug, sqlx::FromRow)]
pub(super) struct OwnerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerRow {
    pub fn into_owner(self) -> Owner {
        let mut owner = Owner::new();
        owner.id = Some(self.id);
        owner.first_name = self.first_name;
        owner.last_name = self.last_name;
        owner.address = self.address;
        owner.city = self.city;
        owner.telephone = self.telephone;
        owner
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct PetRow {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: i32,
    pub type_id: Option<i32>,
    pub type_name: Option<String>,
}

impl PetRow {
    /// Builds an unlinked pet; callers attach it with `Owner::add_pet`.
    pub fn into_pet(self) -> Pet {
        let mut pet = Pet::new();
        pet.id = Some(self.id);
        pet.name = self.name;
        pet.birth_date = self.birth_date;
        pet.pet_type = match (self.type_id, self.type_name) {
            (Some(id), Some(name)) => Some(PetType::new(Some(id), name)),
            _ => None,
        };
        pet
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct PetTypeRow {
    pub id: i32,
    pub name: String,
}

impl From<PetTypeRow> for PetType {
    fn from(row: PetTypeRow) -> Self {
        PetType::new(Some(row.id), row.name)
    }
}

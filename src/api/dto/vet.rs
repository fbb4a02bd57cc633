//! DTOs for the vet directory.

use serde::Serialize;

use crate::domain::entities::{Specialty, Vet};

#[derive(Debug, Serialize)]
pub struct SpecialtyItem {
    pub id: Option<i32>,
    pub name: String,
}

impl From<&Specialty> for SpecialtyItem {
    fn from(specialty: &Specialty) -> Self {
        SpecialtyItem {
            id: specialty.id,
            name: specialty.name.clone(),
        }
    }
}

/// Vet with specialties sorted by name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetItem {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<SpecialtyItem>,
    pub nr_of_specialties: usize,
}

impl From<&Vet> for VetItem {
    fn from(vet: &Vet) -> Self {
        VetItem {
            id: vet.id,
            first_name: vet.first_name.clone(),
            last_name: vet.last_name.clone(),
            specialties: vet.specialties().iter().map(SpecialtyItem::from).collect(),
            nr_of_specialties: vet.nr_of_specialties(),
        }
    }
}

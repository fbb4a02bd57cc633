//! Veterinarian and specialty entities.

use std::collections::HashSet;

use crate::domain::view::SortedView;

/// A field of veterinary expertise, e.g. "radiology".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialty {
    pub id: Option<i32>,
    pub name: String,
}

impl Specialty {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A veterinarian and their specialties.
#[derive(Debug, Clone, Default)]
pub struct Vet {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    specialties: HashSet<Specialty>,
}

impl Vet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_specialty(&mut self, specialty: Specialty) {
        self.specialties.insert(specialty);
    }

    /// Specialties sorted by name, detached from this vet.
    pub fn specialties(&self) -> SortedView<Specialty> {
        SortedView::from_sorted_by(&self.specialties, |s| s.name.clone())
    }

    pub fn specialties_internal(&self) -> &HashSet<Specialty> {
        &self.specialties
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

//! Copies request fields onto aggregates.
//!
//! Mappers overwrite: every field the request shape carries replaces the
//! target's value, empty strings included. Fields the request shape does not
//! carry (ids, an owner's pets, a pet's owner) are left as they are.

use crate::domain::entities::{Owner, OwnerForm, Pet, PetForm, PetType};

/// Merges a request shape `R` into an entity `E` in place.
pub trait Mapper<R, E> {
    /// Applies `request` to `entity` and returns the same entity.
    fn map<'e>(&self, entity: &'e mut E, request: R) -> &'e mut E;
}

/// Maps [`OwnerForm`] onto [`Owner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerEntityMapper;

impl Mapper<OwnerForm, Owner> for OwnerEntityMapper {
    fn map<'e>(&self, owner: &'e mut Owner, form: OwnerForm) -> &'e mut Owner {
        owner.first_name = form.first_name;
        owner.last_name = form.last_name;
        owner.address = form.address;
        owner.city = form.city;
        owner.telephone = form.telephone;
        owner.relink_pets();
        owner
    }
}

/// Maps a [`PetForm`] and the pet type its `type_id` resolved to onto [`Pet`].
///
/// An unresolved type (`None`) keeps the pet's current type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetEntityMapper;

impl Mapper<(PetForm, Option<PetType>), Pet> for PetEntityMapper {
    fn map<'e>(
        &self,
        pet: &'e mut Pet,
        (form, pet_type): (PetForm, Option<PetType>),
    ) -> &'e mut Pet {
        pet.name = form.name;
        pet.birth_date = form.birth_date;
        if let Some(pet_type) = pet_type {
            pet.pet_type = Some(pet_type);
        }
        pet
    }
}

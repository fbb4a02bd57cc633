//! Pet and pet type entities.

use chrono::NaiveDate;

use crate::domain::entities::{Owner, OwnerRef};

/// Kind of animal (dog, cat, ...). Shared by many pets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PetType {
    pub id: Option<i32>,
    pub name: String,
}

impl PetType {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A pet belonging to exactly one [`Owner`].
///
/// Equality and hashing cover the id and every other attribute, the owner
/// back-reference included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pet {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: Option<PetType>,
    pub(crate) owner: Option<OwnerRef>,
}

impl Pet {
    /// Creates a transient pet with no owner.
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            birth_date: None,
            pet_type: None,
            owner: None,
        }
    }

    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    /// Points this pet at `owner` without touching the owner's pets.
    ///
    /// Use [`Owner::add_pet`] to link both sides.
    pub fn set_owner(&mut self, owner: &Owner) {
        self.owner = Some(OwnerRef::of(owner));
    }
}

impl Default for Pet {
    fn default() -> Self {
        Self::new()
    }
}

/// Pet fields carried by a create or update request.
///
/// `type_id` is resolved against storage when the form is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetForm {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub type_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(pet: &Pet) -> u64 {
        let mut hasher = DefaultHasher::new();
        pet.hash(&mut hasher);
        hasher.finish()
    }

    fn owner() -> Owner {
        let mut owner = Owner::new();
        owner.first_name = "John".to_string();
        owner.last_name = "Doe".to_string();
        owner
    }

    #[test]
    fn test_pet_fields() {
        let owner = owner();
        let dog = PetType::new(Some(1), "Dog");
        let mut pet = Pet::new();
        pet.id = Some(2);
        pet.name = "Fluffy".to_string();
        pet.birth_date = NaiveDate::from_ymd_opt(2019, 3, 1);
        pet.pet_type = Some(dog.clone());
        pet.set_owner(&owner);

        assert_eq!(pet.id, Some(2));
        assert_eq!(pet.name, "Fluffy");
        assert!(pet.birth_date.is_some());
        assert_eq!(pet.pet_type, Some(dog));
        assert!(pet.owner().unwrap().refers_to(&owner));
        assert_eq!(pet.owner().unwrap().display_name(), "John Doe");
    }

    #[test]
    fn test_new_pet_has_no_owner() {
        assert!(Pet::new().owner().is_none());
    }

    #[test]
    fn test_pets_with_different_ids_are_unequal() {
        let owner = owner();
        let dog = PetType::new(Some(1), "Dog");

        let mut pet = Pet::new();
        pet.id = Some(2);
        pet.name = "Fluffy".to_string();
        pet.birth_date = NaiveDate::from_ymd_opt(2019, 3, 1);
        pet.pet_type = Some(dog);
        pet.set_owner(&owner);

        let mut other = pet.clone();
        other.id = Some(3);

        assert_ne!(pet, other);
        assert_ne!(hash_of(&pet), hash_of(&other));
    }

    #[test]
    fn test_pets_with_equal_fields_are_equal() {
        let owner = owner();
        let mut pet = Pet::new();
        pet.id = Some(2);
        pet.name = "Fluffy".to_string();
        pet.set_owner(&owner);

        let same = pet.clone();

        assert_eq!(pet, same);
        assert_eq!(hash_of(&pet), hash_of(&same));
    }

    #[test]
    fn test_pet_never_equals_absent_value() {
        let mut pet = Pet::new();
        pet.id = Some(2);
        pet.name = "Fluffy".to_string();

        assert_ne!(Some(&pet), None);
    }

    #[test]
    fn test_pet_type_fields() {
        let cat = PetType::new(Some(2), "Cat");
        assert_eq!(cat.id, Some(2));
        assert_eq!(cat.name, "Cat");

        let unsaved = PetType::new(None, "Hamster");
        assert!(unsaved.id.is_none());
    }
}

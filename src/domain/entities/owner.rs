//! Owner aggregate root and the back-reference its pets hold.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::Pet;
use crate::domain::view::SortedView;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an in-memory [`Owner`].
///
/// Persisted ids are absent until storage assigns them, so links between an
/// owner and its pets are keyed on this value instead. Clones of an owner keep
/// the key of the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceKey(u64);

impl InstanceKey {
    fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

/// A pet owner and the pets they own.
///
/// The pet collection is private: the only way in is [`Owner::add_pet`], which
/// also points the pet back at this owner. Reads go through [`Owner::pets`],
/// which hands out a sorted snapshot.
#[derive(Debug, Clone)]
pub struct Owner {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    instance: InstanceKey,
    pets: Vec<Pet>,
}

impl Owner {
    /// Creates a transient owner with empty fields and no pets.
    pub fn new() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            instance: InstanceKey::next(),
            pets: Vec::new(),
        }
    }

    pub fn instance_key(&self) -> InstanceKey {
        self.instance
    }

    /// Full name as shown on pet records, e.g. `"George Franklin"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Adds `pet` to this owner and sets its owner reference to this owner.
    ///
    /// The collection has set semantics: a pet equal to one already owned is
    /// not stored twice. Returns the stored pet.
    pub fn add_pet(&mut self, mut pet: Pet) -> &Pet {
        pet.set_owner(self);

        let index = match self.pets.iter().position(|owned| *owned == pet) {
            Some(index) => index,
            None => {
                self.pets.push(pet);
                self.pets.len() - 1
            }
        };

        &self.pets[index]
    }

    /// Pets sorted by name, detached from this owner.
    pub fn pets(&self) -> SortedView<Pet> {
        SortedView::from_sorted_by(&self.pets, |pet| pet.name.clone())
    }

    /// The backing collection in insertion order.
    pub fn pets_internal(&self) -> &[Pet] {
        &self.pets
    }

    /// Re-points every owned pet at the current state of this owner.
    ///
    /// Back-references carry a copy of the owner's id and name, so they go
    /// stale when those fields change.
    pub fn relink_pets(&mut self) {
        let link = OwnerRef::of(self);
        for pet in &mut self.pets {
            pet.owner = Some(link.clone());
        }
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner fields carried by a create or update request.
///
/// Applied with [`crate::application::mapper::OwnerEntityMapper`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// Non-owning link from a [`Pet`] back to its [`Owner`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerRef {
    instance: InstanceKey,
    id: Option<i32>,
    first_name: String,
    last_name: String,
}

impl OwnerRef {
    pub fn of(owner: &Owner) -> Self {
        Self {
            instance: owner.instance,
            id: owner.id,
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
        }
    }

    /// True when this link was taken from `owner` (or a clone of it).
    pub fn refers_to(&self, owner: &Owner) -> bool {
        self.instance == owner.instance
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

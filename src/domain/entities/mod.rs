//! Core domain entities representing the clinic's records.
//!
//! # Aggregates
//!
//! - [`Owner`] - owns its [`Pet`]s; each pet holds an [`OwnerRef`] back-reference
//! - [`Vet`] - owns a set of [`Specialty`]
//! - [`Visit`] - refers to its pet by id only
//!
//! [`PetType`] is a shared value referenced by many pets.
//!
//! # Linking
//!
//! [`Owner::add_pet`] is the only operation that links both sides of the
//! owner/pet association. [`Pet::set_owner`] sets the back-reference alone and
//! leaves the owner's collection as it was.
//!
//! # Request shapes
//!
//! - [`OwnerForm`], [`PetForm`] - fields copied onto aggregates by the mappers

pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;

pub use owner::{InstanceKey, Owner, OwnerForm, OwnerRef};
pub use pet::{Pet, PetForm, PetType};
pub use vet::{Specialty, Vet};
pub use visit::{Visit, VisitBuilder};

//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage boundary of every service: handlers and
//! services only ever see them, never a database handle.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Owners with their pets (customers service)
//! - [`PetRepository`] - Pets and pet types (customers service)
//! - [`VetRepository`] - Vets with their specialties (vets service)
//! - [`VisitRepository`] - Visit log (visits service)

pub mod owner_repository;
pub mod pet_repository;
pub mod vet_repository;
pub mod visit_repository;

pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;
pub use vet_repository::VetRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
#[cfg(test)]
pub use vet_repository::MockVetRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;

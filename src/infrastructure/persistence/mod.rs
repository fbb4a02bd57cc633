//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx queries
//! checked at runtime and mapped through `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgOwnerRepository`] - Owners and their pets
//! - [`PgPetRepository`] - Pets and pet types
//! - [`PgVetRepository`] - Vets and specialties
//! - [`PgVisitRepository`] - Visit log

mod rows;

pub mod pg_owner_repository;
pub mod pg_pet_repository;
pub mod pg_vet_repository;
pub mod pg_visit_repository;

pub use pg_owner_repository::PgOwnerRepository;
pub use pg_pet_repository::PgPetRepository;
pub use pg_vet_repository::PgVetRepository;
pub use pg_visit_repository::PgVisitRepository;

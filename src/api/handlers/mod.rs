//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Handlers validate path
//! and body first, then delegate to the services in [`crate::state::AppState`].

pub mod owners;
pub mod pets;
pub mod vets;
pub mod visits;

pub use owners::{
    create_owner_handler, find_owner_handler, list_owners_handler, update_owner_handler,
};
pub use pets::{create_pet_handler, find_pet_handler, list_pet_types_handler, update_pet_handler};
pub use vets::list_vets_handler;
pub use visits::{create_visit_handler, visits_batch_handler, visits_for_pet_handler};

//! Application layer services implementing the resource operations.
//!
//! Services look aggregates up through repository traits, turn absence into
//! [`crate::error::AppError::NotFound`], merge request forms with the
//! [`mapper`]s and persist the result. Request validation has already
//! happened in the API layer by the time a service runs.
//!
//! # Available Services
//!
//! - [`services::owner_service::OwnerService`] - Owner create/read/list/update
//! - [`services::pet_service::PetService`] - Pet create/read/update and pet types
//! - [`services::vet_service::VetService`] - Vet directory
//! - [`services::visit_service::VisitService`] - Visit log and batch query

pub mod mapper;
pub mod services;

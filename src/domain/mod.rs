//! Domain layer containing the clinic's aggregates and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Owner/Pet, Vet/Specialty and Visit aggregates
//! - [`repositories`] - Data access trait definitions
//! - [`view`] - Sorted read-only snapshots handed out by aggregates
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Aggregates keep their child collections private and expose snapshots
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod view;

//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, and validator for input validation.

pub mod owner;
pub mod path;
pub mod pet;
pub mod vet;
pub mod visit;

//! Repository trait for pets and pet types.

use crate::domain::entities::{Pet, PetType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pets.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Finds a pet by id, linked to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError>;

    /// Finds a pet type by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError>;

    /// Lists all pet types.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError>;

    /// Inserts a transient pet or updates a persisted one.
    ///
    /// The pet's owner reference must carry a persisted owner id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the pet has no persisted owner.
    /// Returns [`AppError::NotFound`] when updating an id that no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, pet: Pet) -> Result<Pet, AppError>;
}

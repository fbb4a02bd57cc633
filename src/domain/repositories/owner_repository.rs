//! Repository trait for owner records.

use crate::domain::entities::Owner;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the owner aggregate.
///
/// Owners are loaded together with their pets; every loaded pet is linked to
/// its owner through [`Owner::add_pet`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_owner.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Finds an owner and their pets by owner id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError>;

    /// Lists every owner with their pets, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Owner>, AppError>;

    /// Inserts a transient owner or updates a persisted one.
    ///
    /// Only the owner's own columns are written; pets are saved through
    /// [`crate::domain::repositories::PetRepository::save`]. The returned
    /// owner carries its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when updating an id that no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, owner: Owner) -> Result<Owner, AppError>;
}

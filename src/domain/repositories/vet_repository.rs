//! Repository trait for the vet directory.

use crate::domain::entities::Vet;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for vets.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// Lists every vet with their specialties.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Vet>, AppError>;
}

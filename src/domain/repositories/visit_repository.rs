//! Repository trait for the visit log.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visits.
///
/// Visits are keyed by pet id only; the owner is not part of their identity.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_visit.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Lists the visits of one pet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError>;

    /// Lists the visits of several pets.
    ///
    /// Results are grouped per pet id, in the order the ids are given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_pet_id_in(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, AppError>;

    /// Inserts a visit and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the visit has no pet id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, visit: Visit) -> Result<Visit, AppError>;
}

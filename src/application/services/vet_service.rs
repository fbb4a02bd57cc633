//! Vet directory service.

use crate::domain::entities::Vet;
use crate::domain::repositories::VetRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Read-only access to the vet directory.
pub struct VetService<R: VetRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VetRepository + ?Sized> VetService<R> {
    /// Creates a new vet service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every vet with their specialties.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_vets(&self) -> Result<Vec<Vet>, AppError> {
        self.repository.find_all().await
    }
}

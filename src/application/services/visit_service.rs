//! Visit log service, including the multi-pet batch query.

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for recording and querying visits.
pub struct VisitService<R: VisitRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VisitRepository + ?Sized> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a visit for `pet_id`.
    ///
    /// The pet id from the request path replaces whatever the payload carried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_visit(&self, pet_id: i32, mut visit: Visit) -> Result<Visit, AppError> {
        visit.pet_id = Some(pet_id);

        let saved = self.repository.save(visit).await?;
        tracing::info!(pet_id, visit_id = ?saved.id, "Visit created");

        Ok(saved)
    }

    /// Lists the visits of one pet in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn visits_for_pet(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        self.repository.find_by_pet_id(pet_id).await
    }

    /// Lists the visits of every pet in `pet_ids` as one flat sequence.
    ///
    /// Repeated ids are collapsed (first occurrence wins). The result is the
    /// storage's order, which groups visits per pet id; nothing is re-sorted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn visits_for_pets(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, AppError> {
        let mut unique = Vec::with_capacity(pet_ids.len());
        for id in pet_ids {
            if !unique.contains(id) {
                unique.push(*id);
            }
        }

        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let visits = self.repository.find_by_pet_id_in(&unique).await?;
        tracing::debug!(pets = unique.len(), visits = visits.len(), "Batch visit query");

        Ok(visits)
    }
}

//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{OwnerService, PetService, VetService, VisitService};
use crate::domain::repositories::{
    OwnerRepository, PetRepository, VetRepository, VisitRepository,
};

/// Services behind trait-object repositories, so the same router runs on
/// PostgreSQL in production and on mocks in tests.
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<OwnerService<dyn OwnerRepository>>,
    pub pet_service: Arc<PetService<dyn PetRepository, dyn OwnerRepository>>,
    pub vet_service: Arc<VetService<dyn VetRepository>>,
    pub visit_service: Arc<VisitService<dyn VisitRepository>>,
}

impl AppState {
    pub fn new(
        owner_repository: Arc<dyn OwnerRepository>,
        pet_repository: Arc<dyn PetRepository>,
        vet_repository: Arc<dyn VetRepository>,
        visit_repository: Arc<dyn VisitRepository>,
    ) -> Self {
        Self {
            owner_service: Arc::new(OwnerService::new(owner_repository.clone())),
            pet_service: Arc::new(PetService::new(pet_repository, owner_repository)),
            vet_service: Arc::new(VetService::new(vet_repository)),
            visit_service: Arc::new(VisitService::new(visit_repository)),
        }
    }
}

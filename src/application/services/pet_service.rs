//! Pet management service.

use crate::application::mapper::{Mapper, PetEntityMapper};
use crate::domain::entities::{Pet, PetForm, PetType};
use crate::domain::repositories::{OwnerRepository, PetRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for pets and pet types.
///
/// New pets are attached to their owner with
/// [`crate::domain::entities::Owner::add_pet`] before they are saved. Pet
/// lookups go straight to the pet repository; the owner id a client puts in
/// the URL is not used to scope them.
pub struct PetService<P: PetRepository + ?Sized, O: OwnerRepository + ?Sized> {
    pet_repository: Arc<P>,
    owner_repository: Arc<O>,
    mapper: PetEntityMapper,
}

impl<P: PetRepository + ?Sized, O: OwnerRepository + ?Sized> PetService<P, O> {
    /// Creates a new pet service.
    pub fn new(pet_repository: Arc<P>, owner_repository: Arc<O>) -> Self {
        Self {
            pet_repository,
            owner_repository,
            mapper: PetEntityMapper,
        }
    }

    /// Creates a pet for an existing owner.
    ///
    /// `form.type_id` is resolved against stored pet types; an unknown id
    /// leaves the pet without a type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_pet(&self, owner_id: i32, form: PetForm) -> Result<Pet, AppError> {
        let mut owner = self
            .owner_repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(owner_id, "Owner not found");
                AppError::not_found("Owner not found", json!({ "id": owner_id }))
            })?;

        let pet_type = self.resolve_type(form.type_id).await?;
        let mut pet = Pet::new();
        self.mapper.map(&mut pet, (form, pet_type));

        let pet = owner.add_pet(pet).clone();
        let saved = self.pet_repository.save(pet).await?;
        tracing::info!(owner_id, pet_id = ?saved.id, "Pet created");

        Ok(saved)
    }

    /// Overwrites name, birth date and type of an existing pet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pet does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_pet(&self, pet_id: i32, form: PetForm) -> Result<(), AppError> {
        let mut pet = self.find_pet(pet_id).await?;

        let pet_type = self.resolve_type(form.type_id).await?;
        self.mapper.map(&mut pet, (form, pet_type));

        self.pet_repository.save(pet).await?;
        tracing::info!(pet_id, "Pet updated");

        Ok(())
    }

    /// Retrieves a pet linked to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pet does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_pet(&self, pet_id: i32) -> Result<Pet, AppError> {
        self.pet_repository
            .find_by_id(pet_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(pet_id, "Pet not found");
                AppError::not_found("Pet not found", json!({ "id": pet_id }))
            })
    }

    /// Lists all pet types.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        self.pet_repository.find_pet_types().await
    }

    async fn resolve_type(&self, type_id: i32) -> Result<Option<PetType>, AppError> {
        let pet_type = self.pet_repository.find_pet_type_by_id(type_id).await?;
        if pet_type.is_none() {
            tracing::warn!(type_id, "Unknown pet type requested");
        }
        Ok(pet_type)
    }
}

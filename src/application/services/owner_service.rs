//! Owner management service.

use crate::application::mapper::{Mapper, OwnerEntityMapper};
use crate::domain::entities::{Owner, OwnerForm};
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading and updating owners.
///
/// Request validation happens before any of these methods is called; here
/// the only client error is a missing owner.
pub struct OwnerService<R: OwnerRepository + ?Sized> {
    repository: Arc<R>,
    mapper: OwnerEntityMapper,
}

impl<R: OwnerRepository + ?Sized> OwnerService<R> {
    /// Creates a new owner service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            mapper: OwnerEntityMapper,
        }
    }

    /// Creates an owner from `form` and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_owner(&self, form: OwnerForm) -> Result<Owner, AppError> {
        let mut owner = Owner::new();
        self.mapper.map(&mut owner, form);

        let saved = self.repository.save(owner).await?;
        tracing::info!(owner_id = ?saved.id, "Owner created");

        Ok(saved)
    }

    /// Retrieves an owner and their pets.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_owner(&self, owner_id: i32) -> Result<Owner, AppError> {
        self.repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| owner_not_found(owner_id))
    }

    /// Lists every owner in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_owners(&self) -> Result<Vec<Owner>, AppError> {
        self.repository.find_all().await
    }

    /// Overwrites the fields of an existing owner with `form`.
    ///
    /// The loaded owner is mutated in place and saved; its pets are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_owner(&self, owner_id: i32, form: OwnerForm) -> Result<(), AppError> {
        let mut owner = self.find_owner(owner_id).await?;
        self.mapper.map(&mut owner, form);

        self.repository.save(owner).await?;
        tracing::info!(owner_id, "Owner updated");

        Ok(())
    }
}

fn owner_not_found(owner_id: i32) -> AppError {
    tracing::debug!(owner_id, "Owner not found");
    AppError::not_found("Owner not found", json!({ "id": owner_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Pet, PetType};
    use crate::domain::repositories::MockOwnerRepository;

    fn create_test_owner(id: i32, first: &str, last: &str) -> Owner {
        let mut owner = Owner::new();
        owner.id = Some(id);
        owner.first_name = first.to_string();
        owner.last_name = last.to_string();
        owner.address = "123 Main St".to_string();
        owner.city = "Springfield".to_string();
        owner.telephone = "5551234567".to_string();
        owner
    }

    fn form(first: &str, last: &str) -> OwnerForm {
        OwnerForm {
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            telephone: "5551234567".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_owner_saves_mapped_transient_owner() {
        let mut mock_repo = MockOwnerRepository::new();

        mock_repo
            .expect_save()
            .withf(|owner| {
                owner.id.is_none()
                    && owner.first_name == "George"
                    && owner.last_name == "Bush"
                    && owner.pets_internal().is_empty()
            })
            .times(1)
            .returning(|mut owner| {
                owner.id = Some(1);
                Ok(owner)
            });

        let service = OwnerService::new(Arc::new(mock_repo));

        let owner = service.create_owner(form("George", "Bush")).await.unwrap();

        assert_eq!(owner.id, Some(1));
        assert_eq!(owner.first_name, "George");
    }

    #[tokio::test]
    async fn test_find_owner_success() {
        let mut mock_repo = MockOwnerRepository::new();

        let owner = create_test_owner(1, "George", "Bush");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(move |_| Ok(Some(owner.clone())));

        let service = OwnerService::new(Arc::new(mock_repo));

        let result = service.find_owner(1).await.unwrap();

        assert_eq!(result.first_name, "George");
        assert_eq!(result.last_name, "Bush");
    }

    #[tokio::test]
    async fn test_find_owner_not_found() {
        let mut mock_repo = MockOwnerRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = OwnerService::new(Arc::new(mock_repo));

        let result = service.find_owner(999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_owners_keeps_storage_order() {
        let mut mock_repo = MockOwnerRepository::new();

        let owners = vec![
            create_test_owner(2, "Jane", "Doe"),
            create_test_owner(1, "George", "Bush"),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(owners.clone()));

        let service = OwnerService::new(Arc::new(mock_repo));

        let list = service.list_owners().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].first_name, "Jane");
        assert_eq!(list[1].first_name, "George");
    }

    #[tokio::test]
    async fn test_update_owner_mutates_loaded_owner() {
        let mut mock_repo = MockOwnerRepository::new();

        let mut existing = create_test_owner(1, "George", "Bush");
        let mut pet = Pet::new();
        pet.name = "Basil".to_string();
        pet.pet_type = Some(PetType::new(Some(6), "Hamster"));
        existing.add_pet(pet);
        let existing_key = existing.instance_key();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo
            .expect_save()
            .withf(move |owner| {
                owner.instance_key() == existing_key
                    && owner.id == Some(1)
                    && owner.last_name == "Washington"
                    && owner.pets_internal().len() == 1
                    && owner.pets_internal()[0].owner().unwrap().display_name()
                        == "George Washington"
            })
            .times(1)
            .returning(Ok);

        let service = OwnerService::new(Arc::new(mock_repo));

        let result = service.update_owner(1, form("George", "Washington")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_owner_not_found_skips_save() {
        let mut mock_repo = MockOwnerRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_save().never();

        let service = OwnerService::new(Arc::new(mock_repo));

        let result = service.update_owner(42, form("George", "Washington")).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}

//! PostgreSQL implementation of pet repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{OWNER_COLUMNS, OwnerRow, PET_SELECT, PetRow, PetTypeRow};
use crate::domain::entities::{Pet, PetType};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;

/// PostgreSQL repository for pets and pet types.
pub struct PgPetRepository {
    pool: Arc<PgPool>,
}

impl PgPetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let sql = format!("{PET_SELECT} WHERE p.id = $1");
        let Some(row) = sqlx::query_as::<_, PetRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
        else {
            return Ok(None);
        };

        // Only this pet is attached; the owner's other pets are not loaded.
        let owner_sql = format!("SELECT {OWNER_COLUMNS} FROM owners WHERE id = $1");
        let mut owner = sqlx::query_as::<_, OwnerRow>(&owner_sql)
            .bind(row.owner_id)
            .fetch_one(self.pool.as_ref())
            .await?
            .into_owner();

        Ok(Some(owner.add_pet(row.into_pet()).clone()))
    }

    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError> {
        let row = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(PetType::from))
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let rows = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(PetType::from).collect())
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, AppError> {
        let owner_id = pet.owner().and_then(|owner| owner.id()).ok_or_else(|| {
            AppError::bad_request(
                "Pet must belong to a persisted owner",
                json!({ "pet": pet.name }),
            )
        })?;
        let type_id = pet.pet_type.as_ref().and_then(|t| t.id);

        let id = match pet.id {
            Some(id) => sqlx::query_scalar::<_, i32>(
                r#"
                UPDATE pets SET
                    name       = $1,
                    birth_date = $2,
                    type_id    = $3,
                    owner_id   = $4
                WHERE id = $5
                RETURNING id
                "#,
            )
            .bind(&pet.name)
            .bind(pet.birth_date)
            .bind(type_id)
            .bind(owner_id)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found", json!({ "id": id })))?,
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO pets (name, birth_date, type_id, owner_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&pet.name)
                .bind(pet.birth_date)
                .bind(type_id)
                .bind(owner_id)
                .fetch_one(self.pool.as_ref())
                .await?
            }
        };

        pet.id = Some(id);
        Ok(pet)
    }
}

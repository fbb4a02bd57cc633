//! PostgreSQL implementation of owner repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::rows::{OWNER_COLUMNS, OwnerRow, PET_SELECT, PetRow};
use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

/// PostgreSQL repository for owners.
///
/// Owners are read together with their pets and pet types. Writes touch the
/// `owners` table only.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        let sql = format!("SELECT {OWNER_COLUMNS} FROM owners WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, OwnerRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let pet_sql = format!("{PET_SELECT} WHERE p.owner_id = $1 ORDER BY p.id");
        let pets = sqlx::query_as::<_, PetRow>(&pet_sql)
            .bind(id)
            .fetch_all(self.pool.as_ref())
            .await?;

        let mut owner = row.into_owner();
        for pet in pets {
            owner.add_pet(pet.into_pet());
        }

        Ok(Some(owner))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let sql = format!("SELECT {OWNER_COLUMNS} FROM owners ORDER BY id");
        let rows = sqlx::query_as::<_, OwnerRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        let pet_sql = format!("{PET_SELECT} ORDER BY p.id");
        let pet_rows = sqlx::query_as::<_, PetRow>(&pet_sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        let mut pets_by_owner: HashMap<i32, Vec<PetRow>> = HashMap::new();
        for pet in pet_rows {
            pets_by_owner.entry(pet.owner_id).or_default().push(pet);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let pets = pets_by_owner.remove(&row.id).unwrap_or_default();
                let mut owner = row.into_owner();
                for pet in pets {
                    owner.add_pet(pet.into_pet());
                }
                owner
            })
            .collect())
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, AppError> {
        let id = match owner.id {
            Some(id) => sqlx::query_scalar::<_, i32>(
                r#"
                UPDATE owners SET
                    first_name = $1,
                    last_name  = $2,
                    address    = $3,
                    city       = $4,
                    telephone  = $5
                WHERE id = $6
                RETURNING id
                "#,
            )
            .bind(&owner.first_name)
            .bind(&owner.last_name)
            .bind(&owner.address)
            .bind(&owner.city)
            .bind(&owner.telephone)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found", json!({ "id": id })))?,
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO owners (first_name, last_name, address, city, telephone)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&owner.first_name)
                .bind(&owner.last_name)
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .fetch_one(self.pool.as_ref())
                .await?
            }
        };

        owner.id = Some(id);
        owner.relink_pets();

        Ok(owner)
    }
}

//! PostgreSQL implementation of visit repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct VisitRow {
    id: i32,
    visit_date: Option<NaiveDate>,
    description: Option<String>,
    pet_id: i32,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit {
            id: Some(row.id),
            date: row.visit_date,
            description: row.description,
            pet_id: Some(row.pet_id),
        }
    }
}

/// PostgreSQL repository for the visit log.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, visit_date, description, pet_id
            FROM visits
            WHERE pet_id = $1
            ORDER BY id
            "#,
        )
        .bind(pet_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn find_by_pet_id_in(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, visit_date, description, pet_id
            FROM visits
            WHERE pet_id = ANY($1)
            ORDER BY array_position($1, pet_id), id
            "#,
        )
        .bind(pet_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn save(&self, mut visit: Visit) -> Result<Visit, AppError> {
        let pet_id = visit
            .pet_id
            .ok_or_else(|| AppError::bad_request("Visit must reference a pet", json!({})))?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO visits (pet_id, visit_date, description)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(pet_id)
        .bind(visit.date)
        .bind(&visit.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        visit.id = Some(id);
        Ok(visit)
    }
}

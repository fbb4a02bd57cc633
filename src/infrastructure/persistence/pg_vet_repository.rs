//! PostgreSQL implementation of vet repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Specialty, Vet};
use crate::domain::repositories::VetRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct VetRow {
    id: i32,
    first_name: String,
    last_name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct VetSpecialtyRow {
    vet_id: i32,
    id: i32,
    name: String,
}

/// PostgreSQL repository for the vet directory.
pub struct PgVetRepository {
    pool: Arc<PgPool>,
}

impl PgVetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VetRepository for PgVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, AppError> {
        let rows =
            sqlx::query_as::<_, VetRow>("SELECT id, first_name, last_name FROM vets ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        let specialty_rows = sqlx::query_as::<_, VetSpecialtyRow>(
            r#"
            SELECT vs.vet_id, s.id, s.name
            FROM vet_specialties vs
            JOIN specialties s ON s.id = vs.specialty_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_vet: HashMap<i32, Vec<Specialty>> = HashMap::new();
        for row in specialty_rows {
            by_vet
                .entry(row.vet_id)
                .or_default()
                .push(Specialty::new(Some(row.id), row.name));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut vet = Vet::new();
                vet.id = Some(row.id);
                vet.first_name = row.first_name;
                vet.last_name = row.last_name;
                for specialty in by_vet.remove(&row.id).unwrap_or_default() {
                    vet.add_specialty(specialty);
                }
                vet
            })
            .collect())
    }
}

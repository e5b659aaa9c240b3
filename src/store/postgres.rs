//! PostgreSQL-backed stores.

use super::{CompanyStore, SchoolStore, StoreError};
use crate::model::{CompanyRegistration, NewSchool, SchoolFilter, SchoolRow};
use crate::sql::{insert_company, insert_school, select_school_by_id, select_schools};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgSchoolStore {
    pool: PgPool,
}

impl PgSchoolStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolStore for PgSchoolStore {
    async fn insert(&self, school: NewSchool) -> Result<SchoolRow, StoreError> {
        let sql = insert_school();
        tracing::debug!(sql = %sql, "insert school");
        let row = sqlx::query_as::<_, SchoolRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(school.school_name)
            .bind(school.location)
            .bind(school.province)
            .bind(school.level)
            .bind(school.contact_name)
            .bind(school.position)
            .bind(school.phone)
            .bind(school.email)
            .bind(school.school_fees)
            .bind(school.internet_connectivity)
            .bind(school.service_provider)
            .bind(school.computer_lab)
            .bind(school.computer_count)
            .bind(school.areas_of_need)
            .bind(school.motivation)
            .bind(school.consent)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self, filter: &SchoolFilter) -> Result<Vec<SchoolRow>, StoreError> {
        let q = select_schools(filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, SchoolRow>(&q.sql);
        for p in &q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<SchoolRow>, StoreError> {
        let sql = select_school_by_id();
        let row = sqlx::query_as::<_, SchoolRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn insert(&self, company: &CompanyRegistration) -> Result<(), StoreError> {
        let sql = insert_company();
        let mut tx = self.pool.begin().await?;
        sqlx::query(&sql)
            .bind(&company.id)
            .bind(&company.company_name)
            .bind(&company.industry)
            .bind(&company.location)
            .bind(&company.province)
            .bind(&company.contact_name)
            .bind(&company.position)
            .bind(&company.phone)
            .bind(&company.email)
            .bind(&company.areas_of_interest)
            .bind(&company.budget)
            .bind(&company.motivation)
            .bind(company.consent)
            .bind(company.registered_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    StoreError::Duplicate(company.id.clone())
                }
                _ => StoreError::Db(e),
            })?;
        tx.commit().await?;
        Ok(())
    }
}

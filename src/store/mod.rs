//! Persistence for intake submissions plus database bootstrap (create database, tables).

pub mod memory;
pub mod postgres;

use crate::model::{CompanyRegistration, NewSchool, SchoolFilter, SchoolRow};
use crate::sql::{COMPANIES_TABLE, SCHOOLS_TABLE};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub use memory::{MemoryCompanyStore, MemorySchoolStore};
pub use postgres::{PgCompanyStore, PgSchoolStore};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("invalid DATABASE_URL: {0}")]
    Url(String),
    #[error("{0}")]
    Unavailable(String),
    /// Primary key already taken; carries the conflicting id.
    #[error("duplicate id {0}")]
    Duplicate(String),
}

#[async_trait]
pub trait SchoolStore: Send + Sync {
    async fn insert(&self, school: NewSchool) -> Result<SchoolRow, StoreError>;
    async fn list(&self, filter: &SchoolFilter) -> Result<Vec<SchoolRow>, StoreError>;
    async fn get(&self, id: Uuid) -> Result<Option<SchoolRow>, StoreError>;
    /// Cheap round trip used by `/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn insert(&self, company: &CompanyRegistration) -> Result<(), StoreError>;
}

/// Create the database named in `database_url` if it does not exist (connects to `postgres` on the same server).
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| StoreError::Url(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Create the intake tables if missing.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), StoreError> {
    let schools = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            school_name TEXT NOT NULL,
            location TEXT NOT NULL,
            province TEXT NOT NULL,
            level TEXT NOT NULL,
            contact_name TEXT NOT NULL,
            position TEXT,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            school_fees TEXT NOT NULL,
            internet_connectivity TEXT,
            service_provider TEXT,
            computer_lab TEXT,
            computer_count TEXT,
            areas_of_need TEXT NOT NULL,
            motivation TEXT NOT NULL,
            consent BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        SCHOOLS_TABLE
    );
    sqlx::query(&schools).execute(pool).await?;

    let companies = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            company_name TEXT NOT NULL,
            industry TEXT NOT NULL,
            location TEXT NOT NULL,
            province TEXT NOT NULL,
            contact_name TEXT NOT NULL,
            position TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            areas_of_interest TEXT NOT NULL,
            budget TEXT NOT NULL,
            motivation TEXT NOT NULL,
            consent BOOLEAN NOT NULL,
            registered_at TIMESTAMPTZ NOT NULL
        )
        "#,
        COMPANIES_TABLE
    );
    sqlx::query(&companies).execute(pool).await?;
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| StoreError::Url("no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

//! In-process stores for local development and tests. Contents live only as long as the process.

use super::{CompanyStore, SchoolStore, StoreError};
use crate::model::{CompanyRegistration, NewSchool, SchoolFilter, SchoolRow};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

fn poisoned() -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".into())
}

#[derive(Clone, Default)]
pub struct MemorySchoolStore {
    rows: Arc<RwLock<Vec<SchoolRow>>>,
    /// When set, every call fails with this message.
    failure: Arc<RwLock<Option<String>>>,
}

impl MemorySchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<SchoolRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            ..Self::default()
        }
    }

    /// Make subsequent calls fail, mimicking an unreachable database.
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut f) = self.failure.write() {
            *f = Some(message.to_string());
        }
    }

    pub fn rows(&self) -> Vec<SchoolRow> {
        self.rows.read().map(|r| r.clone()).unwrap_or_default()
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.failure.read().map_err(|_| poisoned())?.as_ref() {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SchoolStore for MemorySchoolStore {
    async fn insert(&self, school: NewSchool) -> Result<SchoolRow, StoreError> {
        self.check()?;
        let row = SchoolRow::new(Uuid::new_v4(), school, Utc::now());
        self.rows.write().map_err(|_| poisoned())?.push(row.clone());
        Ok(row)
    }

    async fn list(&self, filter: &SchoolFilter) -> Result<Vec<SchoolRow>, StoreError> {
        self.check()?;
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut out: Vec<SchoolRow> = rows.iter().filter(|r| filter.matches(r)).cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> Result<Option<SchoolRow>, StoreError> {
        self.check()?;
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[derive(Clone, Default)]
pub struct MemoryCompanyStore {
    records: Arc<RwLock<Vec<CompanyRegistration>>>,
    /// Remaining inserts to reject as duplicates, mimicking ids taken by another instance.
    conflicts: Arc<RwLock<usize>>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` inserts as if their id were already stored.
    pub fn conflict_next(&self, count: usize) {
        if let Ok(mut c) = self.conflicts.write() {
            *c = count;
        }
    }

    pub fn records(&self) -> Vec<CompanyRegistration> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn insert(&self, company: &CompanyRegistration) -> Result<(), StoreError> {
        {
            let mut conflicts = self.conflicts.write().map_err(|_| poisoned())?;
            if *conflicts > 0 {
                *conflicts -= 1;
                return Err(StoreError::Duplicate(company.id.clone()));
            }
        }
        let mut records = self.records.write().map_err(|_| poisoned())?;
        if records.iter().any(|r| r.id == company.id) {
            return Err(StoreError::Duplicate(company.id.clone()));
        }
        records.push(company.clone());
        Ok(())
    }
}

pub mod memory;
pub mod postgres;

pub use memory::MemoryTenantStore;
pub use postgres::PgTenantStore;

use async_trait::async_trait;
use thiserror::Error;

/// A row of the `tenants` table as stored.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TenantRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub houseno: Option<String>,
}

/// A tenant that has not been stored yet; `id` is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub houseno: Option<String>,
}

impl NewTenant {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<&str>,
        houseno: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.map(str::to_owned),
            houseno: houseno.map(str::to_owned),
        }
    }

    /// Checks the required text columns before anything is written.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidTenant`] if `name` or `email` is empty
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::InvalidTenant("name must not be empty".into()));
        }
        if self.email.trim().is_empty() {
            return Err(StoreError::InvalidTenant(format!(
                "email must not be empty (tenant {})",
                self.name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("rejected by storage: {0}")]
    Rejected(String),

    #[error("table \"tenants\" does not exist")]
    MissingTable,

    #[error("invalid tenant: {0}")]
    InvalidTenant(String),
}

/// Persistence contract for tenants.
///
/// Implementations propagate every failure to the caller, which decides
/// whether it is fatal (startup), logged (seeding) or per-request (queries).
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// Verifies the backend is reachable.
    async fn check_connectivity(&self) -> Result<(), StoreError>;

    /// Creates the `tenants` table if it does not exist. Never drops or
    /// truncates existing data.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Inserts `rows` unconditionally and returns how many were written.
    /// Calling it again inserts the same rows again under new ids.
    async fn seed(&self, rows: &[NewTenant]) -> Result<u64, StoreError>;

    /// Returns every stored tenant in the backend's natural order.
    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, StoreError>;
}

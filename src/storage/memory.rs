use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{NewTenant, StoreError, TenantRecord, TenantStore};

/// In-process [`TenantStore`] with the same observable behavior as the
/// PostgreSQL backend: serial ids starting at 1, no table until
/// `ensure_schema`, and insertion order on reads.
///
/// Availability can be toggled to simulate the database going away and
/// coming back. Table creation and seeding can also be made to fail on
/// their own while every other call still succeeds.
pub struct MemoryTenantStore {
    state: Mutex<MemoryState>,
}

struct MemoryState {
    available: bool,
    reject_schema: bool,
    reject_seed: bool,
    table: Option<Vec<TenantRecord>>,
    next_id: i32,
}

impl Default for MemoryTenantStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTenantStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                available: true,
                reject_schema: false,
                reject_seed: false,
                table: None,
                next_id: 1,
            }),
        }
    }

    pub async fn set_available(&self, available: bool) {
        self.state.lock().await.available = available;
    }

    pub async fn set_reject_schema(&self, reject: bool) {
        self.state.lock().await.reject_schema = reject;
    }

    pub async fn set_reject_seed(&self, reject: bool) {
        self.state.lock().await.reject_seed = reject;
    }

    pub async fn table_exists(&self) -> bool {
        self.state.lock().await.table.is_some()
    }
}

impl MemoryState {
    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }
}

#[async_trait]
impl TenantStore for MemoryTenantStore {
    async fn check_connectivity(&self) -> Result<(), StoreError> {
        self.state.lock().await.ensure_available()
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.ensure_available()?;
        if state.reject_schema {
            return Err(StoreError::Rejected(
                "permission denied to create table tenants".into(),
            ));
        }
        state.table.get_or_insert_with(Vec::new);
        Ok(())
    }

    async fn seed(&self, rows: &[NewTenant]) -> Result<u64, StoreError> {
        for row in rows {
            row.validate()?;
        }

        let mut state = self.state.lock().await;
        state.ensure_available()?;
        if state.reject_seed {
            return Err(StoreError::Rejected(
                "permission denied to insert into tenants".into(),
            ));
        }

        let mut next_id = state.next_id;
        let table = state.table.as_mut().ok_or(StoreError::MissingTable)?;
        for row in rows {
            table.push(TenantRecord {
                id: next_id,
                name: row.name.clone(),
                email: row.email.clone(),
                phone: row.phone.clone(),
                houseno: row.houseno.clone(),
            });
            next_id += 1;
        }
        state.next_id = next_id;

        Ok(rows.len() as u64)
    }

    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, StoreError> {
        let state = self.state.lock().await;
        state.ensure_available()?;
        state.table.clone().ok_or(StoreError::MissingTable)
    }
}

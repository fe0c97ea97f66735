use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::debug;

use super::{NewTenant, StoreError, TenantRecord, TenantStore};

/// [`TenantStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgTenantStore {
    pool: PgPool,
}

impl PgTenantStore {
    /// Builds the pool without connecting; the first round trip happens in
    /// [`TenantStore::check_connectivity`].
    #[must_use]
    pub fn connect_lazy(options: PgConnectOptions) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy_with(options);
        Self { pool }
    }

    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TenantStore for PgTenantStore {
    async fn check_connectivity(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
    CREATE TABLE IF NOT EXISTS tenants (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100) NOT NULL,
        phone VARCHAR(15),
        houseno VARCHAR(10)
    )
    "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn seed(&self, rows: &[NewTenant]) -> Result<u64, StoreError> {
        for row in rows {
            row.validate()?;
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for row in rows {
            let result = sqlx::query(
                "INSERT INTO tenants (name, email, phone, houseno) VALUES ($1, $2, $3, $4)",
            )
            .bind(&row.name)
            .bind(&row.email)
            .bind(row.phone.as_deref())
            .bind(row.houseno.as_deref())
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        debug!("Inserted {} tenants", inserted);

        Ok(inserted)
    }

    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, StoreError> {
        let rows = sqlx::query_as::<_, TenantRecord>(
            "SELECT id, name, email, phone, houseno FROM tenants",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

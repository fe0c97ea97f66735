use tracing::{error, info};

use crate::storage::{NewTenant, StoreError, TenantStore};

/// `(name, email, phone, houseno)` for the demo tenants.
const SAMPLE_DATA: [(&str, &str, &str, &str); 11] = [
    ("John Doe", "john@example.com", "(123) 456-7890", "001"),
    ("Jane Smith", "jane@example.com", "(234) 567-8901", "002"),
    ("Alice Johnson", "alice@example.com", "(345) 678-9012", "003"),
    ("Bob Brown", "bob@example.com", "(456) 789-0123", "004"),
    ("Charlie Davis", "charlie@example.com", "(567) 890-1234", "005"),
    ("Diana Evans", "diana@example.com", "(678) 901-2345", "006"),
    ("Edward Green", "edward@example.com", "(789) 012-3456", "007"),
    ("Fiona White", "fiona@example.com", "(890) 123-4567", "008"),
    ("George Black", "george@example.com", "(901) 234-5678", "009"),
    ("Hannah Blue", "hannah@example.com", "(012) 345-6789", "010"),
    ("Ian Red", "ian@example.com", "(123) 456-7891", "011"),
];

/// The fixed sample tenants inserted on every start.
#[must_use]
pub fn sample_tenants() -> Vec<NewTenant> {
    SAMPLE_DATA
        .iter()
        .map(|(name, email, phone, houseno)| {
            NewTenant::new(*name, *email, Some(*phone), Some(*houseno))
        })
        .collect()
}

/// Inserts the sample tenants and logs the outcome.
///
/// There is no existence check, so each restart adds another copy of the
/// sample set. The error is returned for the caller to report; startup
/// continues either way.
///
/// # Errors
/// Returns the store error if any insert fails
pub async fn seed_sample_tenants(store: &dyn TenantStore) -> Result<u64, StoreError> {
    match store.seed(&sample_tenants()).await {
        Ok(inserted) => {
            info!("Sample data inserted ({} tenants)", inserted);
            Ok(inserted)
        }
        Err(e) => {
            error!("Error inserting sample data: {}", e);
            Err(e)
        }
    }
}

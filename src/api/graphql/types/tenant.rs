use async_graphql::{SimpleObject, ID};

use crate::storage::TenantRecord;

/// A tenant as exposed over GraphQL
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Tenant {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub houseno: Option<String>,
}

impl From<TenantRecord> for Tenant {
    fn from(record: TenantRecord) -> Self {
        Self {
            id: ID::from(record.id),
            name: record.name,
            email: record.email,
            phone: record.phone,
            houseno: record.houseno,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_keeps_fields_verbatim() {
        let record = TenantRecord {
            id: 7,
            name: "Edward Green".to_string(),
            email: "edward@example.com".to_string(),
            phone: None,
            houseno: Some("007".to_string()),
        };

        let tenant = Tenant::from(record);

        assert_eq!(tenant.id, ID::from("7"));
        assert_eq!(tenant.name, "Edward Green");
        assert_eq!(tenant.email, "edward@example.com");
        assert_eq!(tenant.phone, None);
        assert_eq!(tenant.houseno.as_deref(), Some("007"));
    }
}

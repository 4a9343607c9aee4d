// src/domain/customer/entity.rs
use crate::domain::customer::value_objects::{CustomerId, CustomerName, EmailAddress};
use chrono::{DateTime, Utc};

/// A customer record as owned by the upstream CRM. This service only reads
/// it; the record id equals the owning person's id.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: CustomerName,
    pub email: EmailAddress,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

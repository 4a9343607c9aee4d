use crate::domain::customer::CustomerId;
use crate::domain::identity::{PersonId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Typed caller identity, built once at the authentication boundary.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub person_id: PersonId,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    /// Whether the caller's own person id matches the given customer record id.
    pub fn owns_customer_record(&self, id: CustomerId) -> bool {
        i64::from(self.person_id) == i64::from(id)
    }
}

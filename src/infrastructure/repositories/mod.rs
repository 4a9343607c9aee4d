// src/infrastructure/repositories/mod.rs
mod postgres_customer;
mod postgres_profile;

use crate::domain::errors::DomainError;

pub use postgres_customer::PostgresCustomerRepository;
pub use postgres_profile::PostgresProfileRepository;

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

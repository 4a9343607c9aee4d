// src/domain/customer/repository.rs
use crate::domain::customer::{entity::Customer, value_objects::CustomerId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>>;
}

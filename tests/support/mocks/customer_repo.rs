// tests/support/mocks/customer_repo.rs
use async_trait::async_trait;
use madoguchi_core::domain::customer::{Customer, CustomerId, CustomerRepository};
use madoguchi_core::domain::errors::DomainResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// 常に空のカスタマーリポジトリ（最小限の実装）
pub struct DummyCustomerRepo;

#[async_trait]
impl CustomerRepository for DummyCustomerRepo {
    async fn find_by_id(&self, _id: CustomerId) -> DomainResult<Option<Customer>> {
        Ok(None)
    }
}

pub struct InMemoryCustomerRepo {
    inner: Mutex<HashMap<i64, Customer>>,
}

impl InMemoryCustomerRepo {
    pub fn with(customers: Vec<Customer>) -> Self {
        let map = customers
            .into_iter()
            .map(|customer| (i64::from(customer.id), customer))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepo {
    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }
}

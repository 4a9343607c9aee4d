use std::sync::Arc;

use crate::domain::customer::CustomerRepository;

pub struct CustomerQueryService {
    pub(super) customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerQueryService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }
}

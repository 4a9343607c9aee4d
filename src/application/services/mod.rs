// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::TokenManagerPort,
        queries::{customers::CustomerQueryService, profiles::ProfileQueryService},
    },
    domain::{customer::CustomerRepository, profile::ProfileRepository},
};

pub struct ApplicationServices {
    pub customer_queries: Arc<CustomerQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        token_manager: Arc<TokenManagerPort>,
    ) -> Self {
        let customer_queries = Arc::new(CustomerQueryService::new(customer_repo));
        let profile_queries = Arc::new(ProfileQueryService::new(profile_repo));

        Self {
            customer_queries,
            profile_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<TokenManagerPort> {
        Arc::clone(&self.token_manager)
    }
}

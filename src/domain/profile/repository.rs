// src/domain/profile/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::profile::{entity::Profile, value_objects::ProfileId};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>>;
}

// tests/support/mocks/profile_repo.rs
use async_trait::async_trait;
use madoguchi_core::domain::errors::DomainResult;
use madoguchi_core::domain::profile::{Profile, ProfileId, ProfileRepository};
use std::collections::HashMap;
use std::sync::Mutex;

/// 常に空のプロフィールリポジトリ（最小限の実装）
pub struct DummyProfileRepo;

#[async_trait]
impl ProfileRepository for DummyProfileRepo {
    async fn find_by_id(&self, _id: ProfileId) -> DomainResult<Option<Profile>> {
        Ok(None)
    }
}

pub struct InMemoryProfileRepo {
    inner: Mutex<HashMap<i64, Profile>>,
}

impl InMemoryProfileRepo {
    pub fn with(profiles: Vec<Profile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|profile| (i64::from(profile.id), profile))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }
}

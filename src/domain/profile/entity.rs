// src/domain/profile/entity.rs
use crate::domain::profile::value_objects::{Nickname, ProfileId};
use chrono::{DateTime, Utc};

/// Public-facing profile page record shown in the portal.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub nickname: Nickname,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

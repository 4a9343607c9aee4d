// tests/support/mocks/security.rs
use madoguchi_core::domain::identity::{PersonId, Role};
use madoguchi_core::infrastructure::security::token::HmacTokenManager;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Duration;

/// テスト用署名シークレット（タイポ防止とIDE補完のため）
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

static TEST_TOKEN_MANAGER: Lazy<Arc<HmacTokenManager>> = Lazy::new(|| {
    Arc::new(HmacTokenManager::new(
        TEST_SECRET,
        Duration::from_secs(3600),
        Arc::new(super::time::DummyClock),
    ))
});

pub fn test_token_manager() -> Arc<HmacTokenManager> {
    Arc::clone(&TEST_TOKEN_MANAGER)
}

pub fn customer_token(person_id: i64) -> String {
    mint(person_id, Role::Customer)
}

pub fn agent_token(person_id: i64) -> String {
    mint(person_id, Role::Agent)
}

pub fn admin_token(person_id: i64) -> String {
    mint(person_id, Role::Admin)
}

/// 固定時刻より 2 時間前に発行された、検証時点で期限切れのトークン
pub fn expired_customer_token(person_id: i64) -> String {
    let clock = super::time::FixedClock(super::time::fixed_now() - chrono::Duration::hours(2));
    let manager = HmacTokenManager::new(TEST_SECRET, Duration::from_secs(3600), Arc::new(clock));
    manager
        .issue(PersonId::new(person_id).expect("person id"), Role::Customer)
        .expect("issue token")
        .token
}

fn mint(person_id: i64, role: Role) -> String {
    test_token_manager()
        .issue(PersonId::new(person_id).expect("person id"), role)
        .expect("issue token")
        .token
}

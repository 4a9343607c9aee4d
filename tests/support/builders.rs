// tests/support/builders.rs
use madoguchi_core::application::dto::AuthenticatedUser;
use madoguchi_core::domain::customer::{Customer, CustomerId, CustomerName, EmailAddress};
use madoguchi_core::domain::identity::{PersonId, Role};
use madoguchi_core::domain::profile::{Nickname, Profile, ProfileId};

use super::mocks::fixed_now;

pub fn sample_customer(id: i64) -> Customer {
    Customer {
        id: CustomerId::new(id).expect("customer id"),
        full_name: CustomerName::new(format!("Customer {id}")).expect("customer name"),
        email: EmailAddress::new(format!("customer{id}@example.com")).expect("email"),
        is_active: true,
        created_at: fixed_now(),
    }
}

pub fn sample_profile(id: i64) -> Profile {
    Profile {
        id: ProfileId::new(id).expect("profile id"),
        nickname: Nickname::new(format!("nick{id}")).expect("nickname"),
        bio: Some("hello from the portal".into()),
        avatar_url: None,
        created_at: fixed_now(),
    }
}

pub fn customer_actor(person_id: i64) -> AuthenticatedUser {
    actor(person_id, Role::Customer)
}

pub fn agent_actor(person_id: i64) -> AuthenticatedUser {
    actor(person_id, Role::Agent)
}

pub fn admin_actor(person_id: i64) -> AuthenticatedUser {
    actor(person_id, Role::Admin)
}

fn actor(person_id: i64, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        person_id: PersonId::new(person_id).expect("person id"),
        role,
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

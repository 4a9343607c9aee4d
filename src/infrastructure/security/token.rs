// src/infrastructure/security/token.rs
//
// Bearer tokens are `<payload>.<tag>` where payload is base64url-encoded JSON
// claims and tag is an HMAC-SHA-256 over the encoded payload. The signing
// secret is shared with the identity provider that fronts this service.
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser},
    error::ApplicationError,
    ports::{ClockPort, security::TokenManager},
};
use crate::domain::identity::{PersonId, Role};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::DateTime;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    role: Role,
    iat: i64,
    exp: i64,
}

pub struct HmacTokenManager {
    secret: Vec<u8>,
    token_ttl: Duration,
    clock: Arc<ClockPort>,
}

impl HmacTokenManager {
    pub fn new(secret: &str, token_ttl: Duration, clock: Arc<ClockPort>) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            token_ttl,
            clock,
        }
    }

    /// Mint a token for the given subject. Production traffic carries tokens
    /// issued by the external identity provider; this is for embedders and
    /// test harnesses that play that role themselves.
    pub fn issue(&self, person_id: PersonId, role: Role) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let ttl = chrono::Duration::from_std(self.token_ttl)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid token ttl: {err}")))?;
        let expires_at = issued_at + ttl;

        let claims = Claims {
            sub: person_id.into(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(format!("claims encoding: {err}")))?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);
        let tag = self.sign(payload_b64.as_bytes())?;

        Ok(AuthTokenDto {
            token: format!("{payload_b64}.{tag}"),
            issued_at,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    fn sign(&self, payload: &[u8]) -> ApplicationResult<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid signing key: {err}")))?;
        mac.update(payload);
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload_b64, tag_b64) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid signing key: {err}")))?;
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&tag)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token claims"))?;

        let issued_at = DateTime::from_timestamp(claims.iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token claims"))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token claims"))?;
        if expires_at <= self.clock.now() {
            return Err(ApplicationError::unauthorized("expired token"));
        }

        let person_id = PersonId::new(claims.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(AuthenticatedUser {
            person_id,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}

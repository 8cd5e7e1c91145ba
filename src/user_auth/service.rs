use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::error::AuthError;
use crate::account::{User, UserRepository};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user email)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

/// Password and bearer-token operations.
///
/// Holds only configuration (signing secret, token lifetime); all user
/// state stays in the database. Token resolution fails closed: a token
/// that is malformed, expired, carries a bad signature or names an
/// unknown user yields an error, never a partial identity.
pub struct CredentialService {
    jwt_secret: String,
    token_ttl: Duration,
}

impl CredentialService {
    pub fn new(jwt_secret: String, token_ttl_minutes: i64) -> Self {
        Self {
            jwt_secret,
            token_ttl: Duration::minutes(token_ttl_minutes),
        }
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash_password(&self, plaintext: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|_| AuthError::PasswordHash)?;
        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns a plain boolean; a malformed stored hash counts as a
    /// non-match rather than an error.
    pub fn verify_password(&self, plaintext: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Issue a signed bearer token for the given subject email
    pub fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.token_ttl)
            .ok_or(AuthError::TokenSigning)?
            .timestamp();

        let claims = Claims {
            sub: email.to_string(),
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|_| AuthError::TokenSigning)
    }

    /// Verify a bearer token and return its claims
    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data =
            decode::<Claims>(token, &decoding_key, &validation).map_err(|_| AuthError::InvalidToken)?;
        Ok(token_data.claims)
    }

    /// Register a new user, returning its generated ID
    pub async fn register(
        &self,
        pool: &PgPool,
        email: &str,
        password: &str,
        is_teacher: bool,
    ) -> Result<i64, AuthError> {
        // 1. Reject an already-used email up front
        if UserRepository::get_by_email(pool, email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        // 2. Hash password
        let password_hash = self.hash_password(password)?;

        // 3. Insert; a concurrent registration can still trip the unique
        //    constraint, which maps to the same rejection
        match UserRepository::create(pool, email, &password_hash, is_teacher).await {
            Ok(user_id) => Ok(user_id),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AuthError::EmailTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials and issue a token for the user
    pub async fn login(
        &self,
        pool: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let user = UserRepository::get_by_email(pool, email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_token(&user.email)
    }

    /// Resolve a bearer token to the user it was issued for
    pub async fn resolve_bearer(&self, pool: &PgPool, token: &str) -> Result<User, AuthError> {
        let claims = self.decode_token(token)?;
        UserRepository::get_by_email(pool, &claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CredentialService {
        CredentialService::new("unit-test-secret".to_string(), 30)
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let svc = service();
        let hash = svc.hash_password("hunter2hunter2").unwrap();
        assert!(svc.verify_password("hunter2hunter2", &hash));
        assert!(!svc.verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let svc = service();
        let h1 = svc.hash_password("same-password").unwrap();
        let h2 = svc.hash_password("same-password").unwrap();
        assert_ne!(h1, h2, "Two hashes of one password must differ by salt");
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let svc = service();
        assert!(!svc.verify_password("whatever", "not-a-phc-string"));
        assert!(!svc.verify_password("whatever", ""));
    }

    #[test]
    fn test_issue_and_decode_roundtrip() {
        let svc = service();
        let token = svc.issue_token("alice@example.com").unwrap();
        let claims = svc.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative lifetime puts the expiry far enough in the past to
        // defeat the default decoding leeway
        let svc = CredentialService::new("unit-test-secret".to_string(), -5);
        let token = svc.issue_token("bob@example.com").unwrap();
        assert!(matches!(
            svc.decode_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let svc = service();
        let other = CredentialService::new("different-secret".to_string(), 30);
        let token = other.issue_token("carol@example.com").unwrap();
        assert!(matches!(
            svc.decode_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let svc = service();
        assert!(matches!(
            svc.decode_token("garbage.token.value"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(svc.decode_token(""), Err(AuthError::InvalidToken)));
    }
}

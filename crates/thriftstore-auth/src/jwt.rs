//! Token issuance and verification.
//!
//! Tokens are HS256-signed with the `ACCESS_TOKEN` secret and expire after
//! [`JwtConfig::token_expiry`] seconds (one day by default).

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use thriftstore_config::JwtConfig;
use thriftstore_core::AppError;

use crate::claims::Claims;

/// Issues a token for `email`.
///
/// The caller is responsible for having established that the requester owns
/// `email`; this function only signs.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        email: email.to_string(),
        exp,
        iat: now,
    };

    encode_claims(&claims, jwt_config)
}

/// Signs an arbitrary claim set.
pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            token_expiry: 86_400,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let config = get_test_jwt_config();

        let token = issue_token("buyer@thrift.test", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.email, "buyer@thrift.test");
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid-token", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = issue_token("buyer@thrift.test", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            token_expiry: 86_400,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            email: "buyer@thrift.test".to_string(),
            exp: now - 3_600,
            iat: now - 7_200,
        };

        let token = encode_claims(&claims, &config).unwrap();
        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_week_long_expiry() {
        let config = JwtConfig {
            token_expiry: 7 * 86_400,
            ..get_test_jwt_config()
        };

        let token = issue_token("seller@thrift.test", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 86_400);
    }
}

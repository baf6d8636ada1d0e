use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued access token.
pub const TOKEN_TTL_DAYS: i64 = 10;

/// Identity the client declares when asking for a token. It is signed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityPayload {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub iat: usize,
    pub exp: usize,
}

pub fn issue_token(payload: &IdentityPayload, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token_with_ttl(payload, secret, Duration::days(TOKEN_TTL_DAYS))
}

pub(crate) fn issue_token_with_ttl(
    payload: &IdentityPayload,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        email: payload.email.clone(),
        name: payload.name.clone(),
        photo: payload.photo.clone(),
        iat: now.timestamp().max(0) as usize,
        exp: (now + ttl).timestamp().max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    fn payload(email: &str) -> IdentityPayload {
        IdentityPayload {
            email: email.to_string(),
            name: Some("Alice".to_string()),
            photo: None,
        }
    }

    #[test]
    fn issued_token_carries_identity_and_ten_day_expiry() {
        let token = issue_token(&payload("a@x.com"), SECRET).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.name.as_deref(), Some("Alice"));
        assert_eq!(claims.exp - claims.iat, (TOKEN_TTL_DAYS * 24 * 60 * 60) as usize);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token_with_ttl(&payload("a@x.com"), SECRET, Duration::hours(-1)).unwrap();
        let err = validate_token(&token, SECRET).unwrap_err();

        assert_eq!(*err.kind(), ErrorKind::ExpiredSignature);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = issue_token(&payload("a@x.com"), "other-secret").unwrap();
        let err = validate_token(&token, SECRET).unwrap_err();

        assert_eq!(*err.kind(), ErrorKind::InvalidSignature);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(validate_token("not-a-jwt", SECRET).is_err());
    }
}

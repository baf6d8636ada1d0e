use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use jsonwebtoken::errors::ErrorKind;
use log::{debug, error, warn};

use crate::auth::token::validate_token;
use crate::auth::utils::extract_token_from_cookie;
use crate::config::AuthSettings;
use crate::error::ApiError;

/// Identity decoded from a valid access token.
///
/// Taking `AuthUser` as a handler argument is what makes a route protected: the
/// handler body never runs unless the cookie verified.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub name: Option<String>,
}

impl AuthUser {
    /// Fails with 403 unless `email` is the caller's own address.
    pub fn ensure_owner(&self, email: &str) -> Result<(), ApiError> {
        if self.email == email {
            Ok(())
        } else {
            warn!("User {} attempted to access data owned by {}", self.email, email);
            Err(ApiError::Forbidden("forbidden"))
        }
    }
}

pub(crate) fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let path = req.path();

    let settings = req.app_data::<web::Data<AuthSettings>>().ok_or_else(|| {
        error!("Auth settings missing from app data");
        ApiError::Internal("authentication is not configured".to_string())
    })?;

    let token = extract_token_from_cookie(req).ok_or_else(|| {
        warn!("No access token cookie for path: {}", path);
        ApiError::Unauthenticated("missing credential")
    })?;

    let claims = validate_token(&token, &settings.secret).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => warn!("Token expired for path: {}", path),
            ErrorKind::InvalidSignature => warn!("Invalid token signature for path: {}", path),
            _ => warn!("Invalid token for path: {}: {:?}", path, e),
        }
        ApiError::Unauthenticated("invalid or expired signature")
    })?;

    debug!("Authenticated {} for path: {}", claims.email, path);
    Ok(AuthUser {
        email: claims.email,
        name: claims.name,
    })
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

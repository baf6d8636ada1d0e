use actix_web::{post, web, HttpResponse};
use log::{error, info};
use serde_json::json;

use crate::auth::{access_token_cookie, issue_token, IdentityPayload};
use crate::config::AuthSettings;
use crate::error::ApiError;

/// Signs whatever identity the client declares and hands it back as the
/// `accessToken` cookie. This is the login step, so it is unauthenticated.
#[post("/auth/access-token")]
pub async fn issue_access_token(
    settings: web::Data<AuthSettings>,
    payload: web::Json<IdentityPayload>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    if payload.email.trim().is_empty() {
        return Err(ApiError::InvalidInput("email is required".to_string()));
    }

    let token = issue_token(&payload, &settings.secret).map_err(|e| {
        error!("Failed to sign access token: {:?}", e);
        ApiError::Internal("failed to generate access token".to_string())
    })?;

    info!("Issued access token for {}", payload.email);
    Ok(HttpResponse::Ok()
        .cookie(access_token_cookie(token, &settings))
        .json(json!({ "success": true })))
}

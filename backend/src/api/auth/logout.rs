use actix_web::{get, web, HttpResponse};
use log::debug;
use serde_json::json;

use crate::auth::clear_access_token_cookie;
use crate::config::AuthSettings;

/// Tokens are not tracked server-side, so logging out only expires the cookie.
#[get("/logout")]
pub async fn logout_get(settings: web::Data<AuthSettings>) -> HttpResponse {
    debug!("Clearing access token cookie");
    HttpResponse::Ok()
        .cookie(clear_access_token_cookie(&settings))
        .json(json!({ "success": true }))
}

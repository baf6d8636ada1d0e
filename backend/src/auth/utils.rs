use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;
use log::debug;

use crate::auth::token::TOKEN_TTL_DAYS;
use crate::config::AuthSettings;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Reads the access token from its cookie. There is no header fallback.
pub fn extract_token_from_cookie(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(ACCESS_TOKEN_COOKIE)?;
    let value = cookie.value();
    if value.is_empty() {
        debug!("{} cookie present but empty", ACCESS_TOKEN_COOKIE);
        return None;
    }
    Some(value.to_string())
}

fn same_site(settings: &AuthSettings) -> SameSite {
    if settings.production {
        SameSite::None
    } else {
        SameSite::Strict
    }
}

pub fn access_token_cookie(token: String, settings: &AuthSettings) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(settings.production)
        .same_site(same_site(settings))
        .max_age(CookieDuration::days(TOKEN_TTL_DAYS))
        .finish()
}

/// Same name and flags as the issued cookie, empty and already expired.
pub fn clear_access_token_cookie(settings: &AuthSettings) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(settings.production)
        .same_site(same_site(settings))
        .max_age(CookieDuration::seconds(0))
        .finish()
}

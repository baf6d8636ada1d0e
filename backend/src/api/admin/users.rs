use actix_web::{get, web, HttpResponse};
use log::debug;
use serde::Deserialize;

use crate::auth::AdminUser;
use crate::error::ApiError;
use crate::models::entities::Role;
use crate::store::Store;

#[derive(Debug, Deserialize)]
pub struct RoleFilter {
    pub role: Option<String>,
}

// Get all users, optionally only those with one role
#[get("/all-users")]
pub async fn all_users(
    store: web::Data<dyn Store>,
    admin: AdminUser,
    query: web::Query<RoleFilter>,
) -> Result<HttpResponse, ApiError> {
    let role = match query.into_inner().role.filter(|r| !r.is_empty()) {
        Some(raw) => Some(raw.parse::<Role>().map_err(ApiError::InvalidInput)?),
        None => None,
    };

    let users = store.list_users(role).await?;
    debug!("Admin {} listed {} users (role filter: {:?})", admin.0.email, users.len(), role);
    Ok(HttpResponse::Ok().json(users))
}

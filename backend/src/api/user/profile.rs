use actix_web::{get, web, HttpResponse};
use log::debug;

use crate::api::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::store::Store;

// Own user record by email, `null` when none exists yet
#[get("/get-user-data/{email}")]
pub async fn get_user_data(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    auth_user.ensure_owner(&email)?;

    let user = store.find_user_by_email(&email).await?;
    debug!("Fetched user data for {} (found: {})", email, user.is_some());
    Ok(HttpResponse::Ok().json(user))
}

// Own user record by id. The record's email decides ownership.
#[get("/get-user-by-id/{id}")]
pub async fn get_user_by_id(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.into_inner())?;

    let user = store.find_user_by_id(id).await?;
    if let Some(user) = &user {
        auth_user.ensure_owner(&user.email)?;
    }
    Ok(HttpResponse::Ok().json(user))
}

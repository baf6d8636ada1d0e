use actix_web::{patch, web, HttpResponse};
use log::info;

use crate::api::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::entities::UserPatch;
use crate::store::Store;

/// Profile edits, role changes and counter bumps. Any verified caller may patch any
/// user by id; the dashboards rely on that for role assignment.
#[patch("/update-user-data/{id}")]
pub async fn update_user_data(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
    patch: web::Json<UserPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.into_inner())?;

    let outcome = store.update_user(id, &patch).await?;
    info!(
        "User {} updated by {} (matched: {}, modified: {})",
        id, auth_user.email, outcome.matched_count, outcome.modified_count
    );
    Ok(HttpResponse::Ok().json(outcome))
}

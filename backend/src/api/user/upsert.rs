use actix_web::{put, web, HttpResponse};
use log::{debug, info};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::entities::CreateUserDto;
use crate::store::{Store, UpsertOutcome};

/// Called after every register / social login. Creates the user record the first
/// time an email is seen and leaves an existing one untouched.
#[put("/create-or-update-user/{email}")]
pub async fn create_or_update_user(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
    user_data: web::Json<CreateUserDto>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    auth_user.ensure_owner(&email)?;

    let mut user_data = user_data.into_inner();
    // The path address is the verified one; the body cannot register someone else.
    user_data.email = email.clone();
    if user_data.name.is_none() {
        user_data.name = auth_user.name.clone();
    }

    match store.insert_user_if_absent(user_data.into_model()).await? {
        Some(user) => {
            info!("Created user {} with role {:?}", user.email, user.role);
            Ok(HttpResponse::Ok().json(UpsertOutcome::inserted(user.id)))
        }
        None => {
            debug!("User already exists: {}", email);
            Ok(HttpResponse::Ok().json(UpsertOutcome::already_exists()))
        }
    }
}

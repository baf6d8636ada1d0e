use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use log::{debug, warn};

use crate::auth::extractor::{authenticate, AuthUser};
use crate::error::ApiError;
use crate::models::entities::Role;
use crate::store::Store;

/// A verified caller whose stored user record has the admin role.
///
/// Verification runs first, then a single lookup by email.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = authenticate(req);
        let store = req.app_data::<web::Data<dyn Store>>().cloned();
        let path = req.path().to_string();

        Box::pin(async move {
            let user = identity?;
            let store = store.ok_or_else(|| ApiError::Internal("storage is not configured".to_string()))?;

            debug!("Checking admin role for path: {}", path);
            match store.find_user_by_email(&user.email).await? {
                Some(record) if record.role == Role::Admin => {
                    debug!("Admin access granted for user {} to path: {}", user.email, path);
                    Ok(AdminUser(user))
                }
                Some(record) => {
                    warn!(
                        "Admin access denied for user {} with role {:?} to path: {}",
                        user.email, record.role, path
                    );
                    Err(ApiError::Forbidden("forbidden"))
                }
                None => {
                    warn!("Admin access denied: no user record for {} (path: {})", user.email, path);
                    Err(ApiError::Forbidden("forbidden"))
                }
            }
        })
    }
}

pub mod token;
pub mod extractor;
pub mod admin_guard;
pub mod utils;

pub use admin_guard::AdminUser;
pub use extractor::AuthUser;
pub use token::{issue_token, validate_token, IdentityPayload};
pub use utils::{access_token_cookie, clear_access_token_cookie, ACCESS_TOKEN_COOKIE};

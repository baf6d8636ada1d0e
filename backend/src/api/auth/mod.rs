pub mod access_token;
pub mod logout;

pub use access_token::issue_access_token;
pub use logout::logout_get;

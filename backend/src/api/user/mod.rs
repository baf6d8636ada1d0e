pub mod upsert;
pub mod profile;
pub mod update;

pub use profile::{get_user_by_id, get_user_data};
pub use update::update_user_data;
pub use upsert::create_or_update_user;

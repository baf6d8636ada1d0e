pub mod users;

pub use users::all_users;

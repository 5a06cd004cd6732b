pub mod profiles;
pub mod users;

pub use users::{CreateUserData, UserSelector};

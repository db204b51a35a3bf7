mod get_user_info;
mod signin_user;
mod signup_user;
mod update_password;

pub use get_user_info::*;
pub use signin_user::*;
pub use signup_user::*;
pub use update_password::*;

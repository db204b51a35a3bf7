pub mod fetch_user_info;
pub mod signin_user;
pub mod signup_user;
pub mod update_password;

pub mod auth;
pub mod favorite;
pub mod review;

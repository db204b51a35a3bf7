mod review_query;
mod review_repository;

pub use review_query::{ReviewQuery, ReviewQueryError};
pub use review_repository::{ReviewRepository, ReviewRepositoryError};

mod favorite_query;
mod favorite_repository;

pub use favorite_query::{FavoriteQuery, FavoriteQueryError};
pub use favorite_repository::{FavoriteRepository, FavoriteRepositoryError};

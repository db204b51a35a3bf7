mod add_favorite_service;
mod get_favorites_service;
mod remove_favorite_service;

pub use add_favorite_service::AddFavoriteService;
pub use get_favorites_service::GetFavoritesService;
pub use remove_favorite_service::RemoveFavoriteService;

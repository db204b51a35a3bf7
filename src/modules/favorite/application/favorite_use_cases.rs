use std::sync::Arc;

use crate::favorite::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, GetFavoritesUseCase, RemoveFavoriteUseCase,
};

#[derive(Clone)]
pub struct FavoriteUseCases {
    pub add: Arc<dyn AddFavoriteUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetFavoritesUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveFavoriteUseCase + Send + Sync>,
}

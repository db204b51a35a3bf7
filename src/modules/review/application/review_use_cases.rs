use std::sync::Arc;

use crate::review::application::ports::incoming::use_cases::{
    CreateReviewUseCase, GetReviewsUseCase, RemoveReviewUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub create: Arc<dyn CreateReviewUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetReviewsUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveReviewUseCase + Send + Sync>,
}

mod create_review_service;
mod get_reviews_service;
mod remove_review_service;

pub use create_review_service::CreateReviewService;
pub use get_reviews_service::GetReviewsService;
pub use remove_review_service::RemoveReviewService;

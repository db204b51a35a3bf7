mod create_review_use_case;
mod get_reviews_use_case;
mod remove_review_use_case;

pub use create_review_use_case::*;
pub use get_reviews_use_case::*;
pub use remove_review_use_case::*;

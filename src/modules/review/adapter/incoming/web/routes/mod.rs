mod create_review;
mod get_reviews;
mod remove_review;

pub use create_review::*;
pub use get_reviews::*;
pub use remove_review::*;

mod json_config;
mod response;
mod validated_body;

pub use json_config::custom_json_config;
pub use response::{into_actix_error, ApiError, ApiResponse, INTERNAL_ERROR_MESSAGE};
pub use validated_body::{RequestSchema, ValidatedBody};

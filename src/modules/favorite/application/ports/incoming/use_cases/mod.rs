mod add_favorite_use_case;
mod get_favorites_use_case;
mod remove_favorite_use_case;

pub use add_favorite_use_case::*;
pub use get_favorites_use_case::*;
pub use remove_favorite_use_case::*;

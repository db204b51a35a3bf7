mod add_favorite;
mod get_favorites;
mod remove_favorite;

pub use add_favorite::*;
pub use get_favorites::*;
pub use remove_favorite::*;

mod document;
mod media;

pub use document::DocumentMeta;
pub use media::{MediaRef, MediaType, UnknownMediaType};

//! Field chains shared by every request that points at a media item.

use super::FieldChain;
use crate::shared::domain::MediaType;

pub const MEDIA_TYPE_REQUIRED: &str = "Tipo de midia necessário";
pub const MEDIA_TYPE_INVALID: &str = "Tipo de midia incorreto";
pub const MEDIA_ID_REQUIRED: &str = "ID midia necessário";
pub const MEDIA_ID_EMPTY: &str = "ID midia não pode ser vazio";
pub const MEDIA_TITLE_REQUIRED: &str = "Titulo da midia necessário";
pub const MEDIA_POSTER_REQUIRED: &str = "Poster de midia necessário";
pub const MEDIA_ID_INVALID: &str = "ID midia inválido";
pub const MEDIA_TITLE_INVALID: &str = "Titulo da midia inválido";
pub const MEDIA_POSTER_INVALID: &str = "Poster de midia inválido";

/// Requests spell the field `mediatype`.
pub fn media_type() -> FieldChain {
    FieldChain::body("mediatype")
        .exists(MEDIA_TYPE_REQUIRED)
        .one_of(MediaType::VALUES, MEDIA_TYPE_INVALID)
}

pub fn media_id(min: usize) -> FieldChain {
    FieldChain::body("mediaId")
        .exists(MEDIA_ID_REQUIRED)
        .is_text(MEDIA_ID_INVALID)
        .min_length(min, MEDIA_ID_EMPTY)
}

pub fn media_title() -> FieldChain {
    FieldChain::body("mediaTitle")
        .exists(MEDIA_TITLE_REQUIRED)
        .is_text(MEDIA_TITLE_INVALID)
}

pub fn media_poster() -> FieldChain {
    FieldChain::body("mediaPoster")
        .exists(MEDIA_POSTER_REQUIRED)
        .is_text(MEDIA_POSTER_INVALID)
}

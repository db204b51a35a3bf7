use utoipa::ToSchema;

use crate::review::application::domain::entities::CONTENT_MIN_CHARS;
use crate::shared::api::RequestSchema;
use crate::shared::validation::{media_fields, FieldChain, RequestBody, ValidationChain};
use crate::AppState;

pub const CONTENT_REQUIRED: &str = "Conteúdo necessário";
pub const CONTENT_TOO_SHORT: &str = "Conteúdo não pode ser vazio";
pub const CONTENT_INVALID: &str = "Conteúdo inválido";

const MEDIA_ID_MIN: usize = 8;

#[derive(Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[schema(example = "00000598")]
    pub media_id: String,
    #[schema(example = "Retrato cru e necessário da periferia carioca.")]
    pub content: String,
    #[serde(rename = "mediatype")]
    #[schema(example = "movie")]
    pub media_type: String,
    #[schema(example = "Cidade de Deus")]
    pub media_title: String,
    #[schema(example = "/k7eYdWvhYQyRQoU2TB2A2Xu2TfD.jpg")]
    pub media_poster: String,
}

impl RequestSchema for CreateReviewRequest {
    fn validation_chain(_state: &AppState) -> ValidationChain {
        ValidationChain::new()
            .field(media_fields::media_id(MEDIA_ID_MIN))
            .field(
                FieldChain::body("content")
                    .exists(CONTENT_REQUIRED)
                    .is_text(CONTENT_INVALID)
                    .min_length(CONTENT_MIN_CHARS, CONTENT_TOO_SHORT),
            )
            .field(media_fields::media_type())
            .field(media_fields::media_title())
            .field(media_fields::media_poster())
    }

    fn from_body(body: &RequestBody) -> Self {
        Self {
            media_id: body.text("mediaId"),
            content: body.text("content"),
            media_type: body.text("mediatype"),
            media_title: body.text("mediaTitle"),
            media_poster: body.text("mediaPoster"),
        }
    }
}

use utoipa::ToSchema;

use crate::shared::api::RequestSchema;
use crate::shared::validation::{media_fields, FieldChain, RequestBody, ValidationChain};
use crate::AppState;

pub const MEDIA_RATE_REQUIRED: &str = "Avaliação da midia necessário";
pub const MEDIA_RATE_INVALID: &str = "Avaliação da midia inválida";

#[derive(Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    #[serde(rename = "mediatype")]
    #[schema(example = "movie")]
    pub media_type: String,
    #[schema(example = "598")]
    pub media_id: String,
    #[schema(example = "Cidade de Deus")]
    pub media_title: String,
    #[schema(example = "/k7eYdWvhYQyRQoU2TB2A2Xu2TfD.jpg")]
    pub media_poster: String,
    /// `None` when the value is not a number.
    #[schema(value_type = f64, example = 8.4)]
    pub media_rate: Option<f64>,
}

impl RequestSchema for AddFavoriteRequest {
    fn validation_chain(_state: &AppState) -> ValidationChain {
        ValidationChain::new()
            .field(media_fields::media_type())
            .field(media_fields::media_id(1))
            .field(media_fields::media_title())
            .field(media_fields::media_poster())
            .field(FieldChain::body("mediaRate").exists(MEDIA_RATE_REQUIRED))
    }

    fn from_body(body: &RequestBody) -> Self {
        Self {
            media_type: body.text("mediatype"),
            media_id: body.text("mediaId"),
            media_title: body.text("mediaTitle"),
            media_poster: body.text("mediaPoster"),
            media_rate: body.number("mediaRate"),
        }
    }
}

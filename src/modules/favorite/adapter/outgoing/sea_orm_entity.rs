use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::favorite::application::domain::entities::Favorite;
use crate::shared::domain::{DocumentMeta, MediaRef, MediaType, UnknownMediaType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub media_type: String,
    pub media_id: String,
    pub media_title: String,
    pub media_poster: String,
    #[sea_orm(column_type = "Double")]
    pub media_rate: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    /// Fails only when the row holds a media type the CHECK constraint should have refused.
    pub fn to_favorite(self) -> Result<Favorite, UnknownMediaType> {
        let media_type = self.media_type.parse::<MediaType>()?;

        Ok(Favorite {
            meta: DocumentMeta {
                id: self.id,
                created_at: self.created_at.with_timezone(&chrono::Utc),
                updated_at: self.updated_at.with_timezone(&chrono::Utc),
            },
            user: UserId::from(self.user_id),
            media: MediaRef {
                media_type,
                media_id: self.media_id,
                media_title: self.media_title,
                media_poster: self.media_poster,
            },
            media_rate: self.media_rate,
        })
    }
}

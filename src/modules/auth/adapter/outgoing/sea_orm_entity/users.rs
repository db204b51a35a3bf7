use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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

impl From<Model> for crate::auth::application::domain::entities::User {
    fn from(model: Model) -> Self {
        use crate::shared::domain::DocumentMeta;

        Self {
            meta: DocumentMeta {
                id: model.id,
                created_at: model.created_at.with_timezone(&chrono::Utc),
                updated_at: model.updated_at.with_timezone(&chrono::Utc),
            },
            username: model.username,
            display_name: model.display_name,
            password_hash: model.password_hash,
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::sea_orm_entity::{Column as FavoriteColumn, Entity as FavoriteEntity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::favorite::application::{
    domain::entities::Favorite,
    ports::outgoing::{FavoriteQuery, FavoriteQueryError},
};

#[derive(Clone, Debug)]
pub struct FavoriteQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_favorite(model: Model) -> Result<Favorite, FavoriteQueryError> {
    model
        .to_favorite()
        .map_err(|e| FavoriteQueryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl FavoriteQuery for FavoriteQueryPostgres {
    async fn get_favorites(&self, owner: UserId) -> Result<Vec<Favorite>, FavoriteQueryError> {
        FavoriteEntity::find()
            .filter(FavoriteColumn::UserId.eq(owner.value()))
            .order_by_desc(FavoriteColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| FavoriteQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(to_favorite)
            .collect()
    }

    async fn find_by_media(
        &self,
        owner: UserId,
        media_id: &str,
    ) -> Result<Option<Favorite>, FavoriteQueryError> {
        FavoriteEntity::find()
            .filter(FavoriteColumn::UserId.eq(owner.value()))
            .filter(FavoriteColumn::MediaId.eq(media_id))
            .one(&*self.db)
            .await
            .map_err(|e| FavoriteQueryError::DatabaseError(e.to_string()))?
            .map(to_favorite)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{binds_uuid, logged_statements};
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn model(owner: Uuid, media_id: &str, media_type: &str, age_minutes: i64) -> Model {
        let at = (Utc::now() - Duration::minutes(age_minutes)).fixed_offset();
        Model {
            id: Uuid::new_v4(),
            user_id: owner,
            media_type: media_type.to_string(),
            media_id: media_id.to_string(),
            media_title: "Central do Brasil".to_string(),
            media_poster: "/central.jpg".to_string(),
            media_rate: 8.0,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_get_favorites_maps_rows_in_order() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(owner, "666", "movie", 1),
                model(owner, "1396", "tv", 60),
            ]])
            .into_connection();

        let favorites = FavoriteQueryPostgres::new(Arc::new(db))
            .get_favorites(UserId::from(owner))
            .await
            .unwrap();

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].media.media_id, "666");
        assert_eq!(favorites[1].media.media_type.as_str(), "tv");
        assert!(favorites.iter().all(|f| f.user.value() == owner));
    }

    #[tokio::test]
    async fn test_get_favorites_filters_by_owner_newest_first() {
        let owner = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<Model>::new()])
                .into_connection(),
        );

        FavoriteQueryPostgres::new(Arc::clone(&db))
            .get_favorites(UserId::from(owner))
            .await
            .unwrap();

        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.contains(r#""favorites"."user_id" = $1"#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "favorites"."created_at" DESC"#), "{sql}");
        assert!(binds_uuid(&statements[0], owner));
    }

    #[tokio::test]
    async fn test_find_by_media_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let found = FavoriteQueryPostgres::new(Arc::new(db))
            .find_by_media(UserId::from(Uuid::new_v4()), "666")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_media_some() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(owner, "666", "movie", 0)]])
            .into_connection();

        let found = FavoriteQueryPostgres::new(Arc::new(db))
            .find_by_media(UserId::from(owner), "666")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.media.media_title, "Central do Brasil");
    }

    #[tokio::test]
    async fn test_corrupt_media_type_is_reported() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(owner, "666", "podcast", 0)]])
            .into_connection();

        let result = FavoriteQueryPostgres::new(Arc::new(db))
            .get_favorites(UserId::from(owner))
            .await;

        assert!(matches!(result, Err(FavoriteQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("pool timed out".to_string())])
            .into_connection();

        let result = FavoriteQueryPostgres::new(Arc::new(db))
            .get_favorites(UserId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(FavoriteQueryError::DatabaseError(msg)) if msg.contains("pool")));
    }
}

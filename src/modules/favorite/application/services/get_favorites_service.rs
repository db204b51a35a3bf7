use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    favorite::application::{
        domain::entities::Favorite,
        ports::{
            incoming::use_cases::{GetFavoritesError, GetFavoritesUseCase},
            outgoing::FavoriteQuery,
        },
    },
};

#[derive(Debug, Clone)]
pub struct GetFavoritesService<Q>
where
    Q: FavoriteQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFavoritesService<Q>
where
    Q: FavoriteQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFavoritesUseCase for GetFavoritesService<Q>
where
    Q: FavoriteQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Favorite>, GetFavoritesError> {
        self.query
            .get_favorites(owner)
            .await
            .map_err(|e| GetFavoritesError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorite::application::ports::outgoing::FavoriteQueryError;
    use crate::tests::support::fakes::sample_media;
    use crate::tests::support::mocks::MockFavoriteQueryPort;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_get_favorites_returns_owner_list() {
        let owner = UserId::from(Uuid::new_v4());
        let favorites = vec![
            Favorite::new(owner, sample_media("2"), 6.0),
            Favorite::new(owner, sample_media("1"), 9.0),
        ];
        let returned = favorites.clone();

        let mut query = MockFavoriteQueryPort::new();
        query
            .expect_get_favorites()
            .withf(move |o| *o == owner)
            .returning(move |_| Ok(returned.clone()));

        let result = GetFavoritesService::new(query).execute(owner).await.unwrap();

        assert_eq!(result, favorites);
    }

    #[tokio::test]
    async fn test_get_favorites_query_error() {
        let mut query = MockFavoriteQueryPort::new();
        query
            .expect_get_favorites()
            .returning(|_| Err(FavoriteQueryError::DatabaseError("down".into())));

        let result = GetFavoritesService::new(query)
            .execute(UserId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(GetFavoritesError::QueryError(_))));
    }
}

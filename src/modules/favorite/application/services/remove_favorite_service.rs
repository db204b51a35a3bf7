use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    favorite::application::ports::{
        incoming::use_cases::{RemoveFavoriteError, RemoveFavoriteUseCase},
        outgoing::{FavoriteRepository, FavoriteRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct RemoveFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveFavoriteUseCase for RemoveFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, favorite_id: Uuid) -> Result<(), RemoveFavoriteError> {
        self.repository
            .delete_favorite(owner, favorite_id)
            .await
            .map_err(|e| match e {
                FavoriteRepositoryError::FavoriteNotFound => RemoveFavoriteError::FavoriteNotFound,
                other => RemoveFavoriteError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mocks::MockFavoriteRepositoryPort;
    use mockall::Sequence;

    #[tokio::test]
    async fn test_remove_favorite_twice_reports_not_found() {
        let owner = UserId::from(Uuid::new_v4());
        let favorite_id = Uuid::new_v4();
        let mut seq = Sequence::new();

        let mut repository = MockFavoriteRepositoryPort::new();
        repository
            .expect_delete_favorite()
            .withf(move |o, id| *o == owner && *id == favorite_id)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repository
            .expect_delete_favorite()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(FavoriteRepositoryError::FavoriteNotFound));

        let service = RemoveFavoriteService::new(repository);

        assert!(service.execute(owner, favorite_id).await.is_ok());
        assert!(matches!(
            service.execute(owner, favorite_id).await,
            Err(RemoveFavoriteError::FavoriteNotFound)
        ));
    }

    #[tokio::test]
    async fn test_remove_favorite_database_error() {
        let mut repository = MockFavoriteRepositoryPort::new();
        repository
            .expect_delete_favorite()
            .returning(|_, _| Err(FavoriteRepositoryError::DatabaseError("locked".into())));

        let result = RemoveFavoriteService::new(repository)
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(RemoveFavoriteError::RepositoryError(_))));
    }
}

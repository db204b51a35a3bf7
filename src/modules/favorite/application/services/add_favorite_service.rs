use async_trait::async_trait;
use tracing::debug;

use crate::favorite::application::{
    domain::entities::Favorite,
    ports::{
        incoming::use_cases::{
            AddFavoriteCommand, AddFavoriteError, AddFavoriteOutcome, AddFavoriteUseCase,
        },
        outgoing::{FavoriteQuery, FavoriteRepository},
    },
};

pub struct AddFavoriteService<Q, R>
where
    Q: FavoriteQuery + Send + Sync,
    R: FavoriteRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> AddFavoriteService<Q, R>
where
    Q: FavoriteQuery + Send + Sync,
    R: FavoriteRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AddFavoriteUseCase for AddFavoriteService<Q, R>
where
    Q: FavoriteQuery + Send + Sync,
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AddFavoriteCommand,
    ) -> Result<AddFavoriteOutcome, AddFavoriteError> {
        let existing = self
            .query
            .find_by_media(command.owner(), &command.media().media_id)
            .await
            .map_err(|e| AddFavoriteError::QueryError(e.to_string()))?;

        if let Some(favorite) = existing {
            debug!(favorite_id = %favorite.meta.id, "Favorite already stored");
            return Ok(AddFavoriteOutcome::AlreadyExists(favorite));
        }

        let favorite = Favorite::new(
            command.owner(),
            command.media().clone(),
            command.media_rate(),
        );

        self.repository
            .create_favorite(favorite)
            .await
            .map(AddFavoriteOutcome::Created)
            .map_err(|e| AddFavoriteError::RepositoryError(e.to_string()))
    }
}

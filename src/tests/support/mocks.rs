use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{User, UserId},
    ports::outgoing::{UserQuery, UserQueryError, UserRepository, UserRepositoryError},
};
use crate::favorite::application::{
    domain::entities::Favorite,
    ports::outgoing::{
        FavoriteQuery, FavoriteQueryError, FavoriteRepository, FavoriteRepositoryError,
    },
};
use crate::review::application::{
    domain::entities::Review,
    ports::outgoing::{ReviewQuery, ReviewQueryError, ReviewRepository, ReviewRepositoryError},
};

mock! {
    pub UserQueryPort {}

    #[async_trait]
    impl UserQuery for UserQueryPort {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryPort {}

    #[async_trait]
    impl UserRepository for UserRepositoryPort {
        async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;
        async fn update_password(
            &self,
            user_id: UserId,
            new_password_hash: String,
        ) -> Result<(), UserRepositoryError>;
    }
}

mock! {
    pub FavoriteQueryPort {}

    #[async_trait]
    impl FavoriteQuery for FavoriteQueryPort {
        async fn get_favorites(&self, owner: UserId) -> Result<Vec<Favorite>, FavoriteQueryError>;
        async fn find_by_media(
            &self,
            owner: UserId,
            media_id: &str,
        ) -> Result<Option<Favorite>, FavoriteQueryError>;
    }
}

mock! {
    pub FavoriteRepositoryPort {}

    #[async_trait]
    impl FavoriteRepository for FavoriteRepositoryPort {
        async fn create_favorite(&self, favorite: Favorite) -> Result<Favorite, FavoriteRepositoryError>;
        async fn delete_favorite(
            &self,
            owner: UserId,
            favorite_id: Uuid,
        ) -> Result<(), FavoriteRepositoryError>;
    }
}

mock! {
    pub ReviewQueryPort {}

    #[async_trait]
    impl ReviewQuery for ReviewQueryPort {
        async fn get_reviews(&self, owner: UserId) -> Result<Vec<Review>, ReviewQueryError>;
    }
}

mock! {
    pub ReviewRepositoryPort {}

    #[async_trait]
    impl ReviewRepository for ReviewRepositoryPort {
        async fn create_review(&self, review: Review) -> Result<Review, ReviewRepositoryError>;
        async fn delete_review(
            &self,
            owner: UserId,
            review_id: Uuid,
        ) -> Result<(), ReviewRepositoryError>;
    }
}

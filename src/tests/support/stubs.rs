//! Use cases that answer with an empty or failing result; tests replace the
//! ones they exercise.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthSession, User, UserId, UserInfo};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::auth::application::use_cases::{
    fetch_user_info::{FetchUserInfoError, IFetchUserInfoUseCase},
    signin_user::{ISigninUserUseCase, SigninCommand, SigninError},
    signup_user::{ISignupUserUseCase, SignupCommand, SignupError},
    update_password::{IUpdatePasswordUseCase, UpdatePasswordCommand, UpdatePasswordError},
};
use crate::favorite::application::domain::entities::Favorite;
use crate::favorite::application::ports::incoming::use_cases::{
    AddFavoriteCommand, AddFavoriteError, AddFavoriteOutcome, AddFavoriteUseCase,
    GetFavoritesError, GetFavoritesUseCase, RemoveFavoriteError, RemoveFavoriteUseCase,
};
use crate::review::application::domain::entities::Review;
use crate::review::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewError, CreateReviewUseCase, GetReviewsError,
    GetReviewsUseCase, RemoveReviewError, RemoveReviewUseCase,
};

/// No usernames are taken.
pub struct EmptyUserQuery;

#[async_trait]
impl UserQuery for EmptyUserQuery {
    async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }
}

// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────

pub struct StubSignupUserUseCase;

#[async_trait]
impl ISignupUserUseCase for StubSignupUserUseCase {
    async fn execute(&self, _command: SignupCommand) -> Result<AuthSession, SignupError> {
        Err(SignupError::RepositoryError("stub".to_string()))
    }
}

pub struct StubSigninUserUseCase;

#[async_trait]
impl ISigninUserUseCase for StubSigninUserUseCase {
    async fn execute(&self, _command: SigninCommand) -> Result<AuthSession, SigninError> {
        Err(SigninError::UserNotFound)
    }
}

pub struct StubUpdatePasswordUseCase;

#[async_trait]
impl IUpdatePasswordUseCase for StubUpdatePasswordUseCase {
    async fn execute(
        &self,
        _command: UpdatePasswordCommand,
    ) -> Result<UserInfo, UpdatePasswordError> {
        Err(UpdatePasswordError::UserNotFound)
    }
}

pub struct StubFetchUserInfoUseCase;

#[async_trait]
impl IFetchUserInfoUseCase for StubFetchUserInfoUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserInfo, FetchUserInfoError> {
        Err(FetchUserInfoError::UserNotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Favorites
// ──────────────────────────────────────────────────────────

pub struct StubAddFavoriteUseCase;

#[async_trait]
impl AddFavoriteUseCase for StubAddFavoriteUseCase {
    async fn execute(
        &self,
        _command: AddFavoriteCommand,
    ) -> Result<AddFavoriteOutcome, AddFavoriteError> {
        Err(AddFavoriteError::RepositoryError("stub".to_string()))
    }
}

pub struct StubGetFavoritesUseCase;

#[async_trait]
impl GetFavoritesUseCase for StubGetFavoritesUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Favorite>, GetFavoritesError> {
        Ok(vec![])
    }
}

pub struct StubRemoveFavoriteUseCase;

#[async_trait]
impl RemoveFavoriteUseCase for StubRemoveFavoriteUseCase {
    async fn execute(&self, _owner: UserId, _favorite_id: Uuid) -> Result<(), RemoveFavoriteError> {
        Err(RemoveFavoriteError::FavoriteNotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Reviews
// ──────────────────────────────────────────────────────────

pub struct StubCreateReviewUseCase;

#[async_trait]
impl CreateReviewUseCase for StubCreateReviewUseCase {
    async fn execute(&self, _command: CreateReviewCommand) -> Result<Review, CreateReviewError> {
        Err(CreateReviewError::RepositoryError("stub".to_string()))
    }
}

pub struct StubGetReviewsUseCase;

#[async_trait]
impl GetReviewsUseCase for StubGetReviewsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Review>, GetReviewsError> {
        Ok(vec![])
    }
}

pub struct StubRemoveReviewUseCase;

#[async_trait]
impl RemoveReviewUseCase for StubRemoveReviewUseCase {
    async fn execute(&self, _owner: UserId, _review_id: Uuid) -> Result<(), RemoveReviewError> {
        Err(RemoveReviewError::ReviewNotFound)
    }
}

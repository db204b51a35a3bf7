use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::use_cases::{
    fetch_user_info::IFetchUserInfoUseCase, signin_user::ISigninUserUseCase,
    signup_user::ISignupUserUseCase, update_password::IUpdatePasswordUseCase,
};
use crate::favorite::application::favorite_use_cases::FavoriteUseCases;
use crate::favorite::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, GetFavoritesUseCase, RemoveFavoriteUseCase,
};
use crate::review::application::ports::incoming::use_cases::{
    CreateReviewUseCase, GetReviewsUseCase, RemoveReviewUseCase,
};
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    signup_user: Arc<dyn ISignupUserUseCase + Send + Sync>,
    signin_user: Arc<dyn ISigninUserUseCase + Send + Sync>,
    update_password: Arc<dyn IUpdatePasswordUseCase + Send + Sync>,
    fetch_user_info: Arc<dyn IFetchUserInfoUseCase + Send + Sync>,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    favorite: FavoriteUseCases,
    review: ReviewUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup_user: Arc::new(StubSignupUserUseCase),
            signin_user: Arc::new(StubSigninUserUseCase),
            update_password: Arc::new(StubUpdatePasswordUseCase),
            fetch_user_info: Arc::new(StubFetchUserInfoUseCase),
            user_query: Arc::new(EmptyUserQuery),
            favorite: FavoriteUseCases {
                add: Arc::new(StubAddFavoriteUseCase),
                get_list: Arc::new(StubGetFavoritesUseCase),
                remove: Arc::new(StubRemoveFavoriteUseCase),
            },
            review: ReviewUseCases {
                create: Arc::new(StubCreateReviewUseCase),
                get_list: Arc::new(StubGetReviewsUseCase),
                remove: Arc::new(StubRemoveReviewUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup_user(mut self, uc: impl ISignupUserUseCase + Send + Sync + 'static) -> Self {
        self.signup_user = Arc::new(uc);
        self
    }

    pub fn with_signin_user(mut self, uc: impl ISigninUserUseCase + Send + Sync + 'static) -> Self {
        self.signin_user = Arc::new(uc);
        self
    }

    pub fn with_update_password(
        mut self,
        uc: impl IUpdatePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_password = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_info(
        mut self,
        uc: impl IFetchUserInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_info = Arc::new(uc);
        self
    }

    pub fn with_user_query(mut self, query: impl UserQuery + Send + Sync + 'static) -> Self {
        self.user_query = Arc::new(query);
        self
    }

    pub fn with_add_favorite(mut self, uc: impl AddFavoriteUseCase + Send + Sync + 'static) -> Self {
        self.favorite.add = Arc::new(uc);
        self
    }

    pub fn with_get_favorites(
        mut self,
        uc: impl GetFavoritesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.favorite.get_list = Arc::new(uc);
        self
    }

    pub fn with_remove_favorite(
        mut self,
        uc: impl RemoveFavoriteUseCase + Send + Sync + 'static,
    ) -> Self {
        self.favorite.remove = Arc::new(uc);
        self
    }

    pub fn with_create_review(
        mut self,
        uc: impl CreateReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.create = Arc::new(uc);
        self
    }

    pub fn with_get_reviews(mut self, uc: impl GetReviewsUseCase + Send + Sync + 'static) -> Self {
        self.review.get_list = Arc::new(uc);
        self
    }

    pub fn with_remove_review(
        mut self,
        uc: impl RemoveReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.remove = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_user_use_case: self.signup_user,
            signin_user_use_case: self.signin_user,
            update_password_use_case: self.update_password,
            fetch_user_info_use_case: self.fetch_user_info,
            user_query: self.user_query,
            favorite: self.favorite,
            review: self.review,
        })
    }
}

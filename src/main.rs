pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::favorite;
pub use modules::review;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::use_cases::{
    fetch_user_info::{FetchUserInfoUseCase, IFetchUserInfoUseCase},
    signin_user::{ISigninUserUseCase, SigninUserUseCase},
    signup_user::{ISignupUserUseCase, SignupUserUseCase},
    update_password::{IUpdatePasswordUseCase, UpdatePasswordUseCase},
};
use crate::config::AppConfig;
use crate::favorite::adapter::outgoing::{
    favorite_query_postgres::FavoriteQueryPostgres,
    favorite_repository_postgres::FavoriteRepositoryPostgres,
};
use crate::favorite::application::{
    favorite_use_cases::FavoriteUseCases,
    services::{AddFavoriteService, GetFavoritesService, RemoveFavoriteService},
};
use crate::review::adapter::outgoing::{
    review_query_postgres::ReviewQueryPostgres,
    review_repository_postgres::ReviewRepositoryPostgres,
};
use crate::review::application::{
    review_use_cases::ReviewUseCases,
    services::{CreateReviewService, GetReviewsService, RemoveReviewService},
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub signup_user_use_case: Arc<dyn ISignupUserUseCase + Send + Sync>,
    pub signin_user_use_case: Arc<dyn ISigninUserUseCase + Send + Sync>,
    pub update_password_use_case: Arc<dyn IUpdatePasswordUseCase + Send + Sync>,
    pub fetch_user_info_use_case: Arc<dyn IFetchUserInfoUseCase + Send + Sync>,
    /// Backs the username uniqueness rule of the signup request.
    pub user_query: Arc<dyn UserQuery + Send + Sync>,
    pub favorite: FavoriteUseCases,
    pub review: ReviewUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    config::load_env_file();

    let app_config = AppConfig::from_env().context("invalid server configuration")?;
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let password_hasher: Arc<dyn PasswordHasher> =
        Arc::new(Argon2Hasher::from_env().context("invalid Argon2 configuration")?);

    let server_url = app_config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(app_config.database_url.clone());
    opt.max_connections(app_config.db_max_connections)
        .min_connections(app_config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let signup_user_use_case = SignupUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let signin_user_use_case = SigninUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let update_password_use_case =
        UpdatePasswordUseCase::new(user_query.clone(), user_repo, Arc::clone(&password_hasher));
    let fetch_user_info_use_case = FetchUserInfoUseCase::new(user_query.clone());

    // Favorites
    let favorite_repo = FavoriteRepositoryPostgres::new(Arc::clone(&db_arc));
    let favorite_query = FavoriteQueryPostgres::new(Arc::clone(&db_arc));
    let favorite = FavoriteUseCases {
        add: Arc::new(AddFavoriteService::new(
            favorite_query.clone(),
            favorite_repo.clone(),
        )),
        get_list: Arc::new(GetFavoritesService::new(favorite_query)),
        remove: Arc::new(RemoveFavoriteService::new(favorite_repo)),
    };

    // Reviews
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let review = ReviewUseCases {
        create: Arc::new(CreateReviewService::new(review_repo.clone())),
        get_list: Arc::new(GetReviewsService::new(ReviewQueryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        remove: Arc::new(RemoveReviewService::new(review_repo)),
    };

    let state = AppState {
        signup_user_use_case: Arc::new(signup_user_use_case),
        signin_user_use_case: Arc::new(signin_user_use_case),
        update_password_use_case: Arc::new(update_password_use_case),
        fetch_user_info_use_case: Arc::new(fetch_user_info_use_case),
        user_query: Arc::new(user_query),
        favorite,
        review,
    };

    let db_for_server = Arc::clone(&db_arc);

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await
    .context("server stopped with an error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // User
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::signin_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_info_handler);
    // Favorites
    cfg.service(crate::favorite::adapter::incoming::web::routes::get_favorites_handler);
    cfg.service(crate::favorite::adapter::incoming::web::routes::add_favorite_handler);
    cfg.service(crate::favorite::adapter::incoming::web::routes::remove_favorite_handler);
    // Reviews
    cfg.service(crate::review::adapter::incoming::web::routes::get_reviews_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::create_review_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::remove_review_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}

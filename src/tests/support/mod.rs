pub mod app_state_builder;
pub mod fakes;
pub mod mocks;
pub mod stubs;

use std::sync::Arc;

use actix_web::web;
use sea_orm::{DatabaseConnection, Statement, Value};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use fakes::FakeTokenProvider;

/// `Authorization` header value accepted by [`FakeTokenProvider`].
pub fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", FakeTokenProvider::token_for(user_id))
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(FakeTokenProvider);
    web::Data::new(provider)
}

/// Statements a mock connection received. Every adapter holding a clone of
/// `db` must be dropped first.
pub fn logged_statements(db: Arc<DatabaseConnection>) -> Vec<Statement> {
    let db = Arc::try_unwrap(db).unwrap_or_else(|_| panic!("mock connection still shared"));
    db.into_transaction_log()
        .iter()
        .flat_map(|transaction| transaction.statements().to_vec())
        .collect()
}

pub fn binds_uuid(statement: &Statement, id: Uuid) -> bool {
    statement
        .values
        .as_ref()
        .is_some_and(|values| values.0.contains(&Value::from(id)))
}

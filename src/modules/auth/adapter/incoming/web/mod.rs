pub mod extractors;
pub mod requests;
pub mod routes;

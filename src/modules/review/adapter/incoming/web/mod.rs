pub mod requests;
pub mod routes;

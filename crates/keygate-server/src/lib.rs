//! # keygate-server
//!
//! HTTP server for keygate: a login endpoint that registers identifiers on
//! first use, and CRUD endpoints for string items.

pub mod error;
pub mod routes;
mod server;

pub use error::ApiError;
pub use routes::router;
pub use server::ApiServer;

//! meeple-server: HTTP API for a board-game review platform
//!
//! Categories, reviews, comments and users stored in PostgreSQL, served as
//! JSON with filtering, sorting and pagination on the list endpoints.
//!
//! Layers, leaf first:
//! - [`models`]: query-string and body validation
//! - [`db`]: connection pool, existence checks, repositories
//! - [`http`]: handlers, extractors, error translation, server

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options};
pub use http::{build_router, run_server, ApiError, ServerConfig};

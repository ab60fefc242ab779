//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (default 5 connections), cloned into request state
//! - List operations compute derived counts with JOINs, no N+1 queries
//! - Rely on DB constraints for referential integrity
//! - Explicit existence checks only where a missing parent must be a 404

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

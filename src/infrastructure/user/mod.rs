//! User infrastructure module
//!
//! This module provides the in-memory user repository used in place of a
//! durable store for tests and local development.

mod repository;

pub use repository::InMemoryUserRepository;

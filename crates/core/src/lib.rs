//! Functional core for huddle.
//!
//! Pure domain types, request validation, cache key and invalidation planning,
//! and the repository/cache traits the server implements. Nothing in this
//! crate performs I/O.

pub mod cache;
pub mod event;
pub mod service;
pub mod storage;

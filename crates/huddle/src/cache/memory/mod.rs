//! In-memory cache backend for single-instance deployments and tests.

#![allow(dead_code)]

mod cache;

pub use cache::MemoryCache;

//! Redis cache backend for multi-instance deployments.

#![allow(dead_code)]

mod cache;
mod error;

pub use cache::RedisCache;

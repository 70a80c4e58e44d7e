//! Cache backend implementations and the read-through layer.
//!
//! The backend is selected at compile time:
//!
//! - `memory` (default): in-process LRU cache
//! - `redis`: Redis via a connection manager
//!
//! The memory backend is always compiled so tests can use it.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p huddle --features memory"
);

pub mod memory;
mod read_through;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(test)]
pub mod testing;

#[cfg_attr(not(feature = "memory"), allow(unused_imports))]
pub use memory::MemoryCache;
pub use read_through::ReadThroughCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;

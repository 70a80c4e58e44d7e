//! In-memory storage backend for testing and development.
//!
//! All tables live behind a single `RwLock`, so every write, including the
//! RSVP upsert and the cascading event delete, is applied atomically.

#![cfg_attr(not(feature = "inmemory"), allow(dead_code))]

mod repository;

pub use repository::InMemoryRepository;

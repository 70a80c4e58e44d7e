//! Service layer between the HTTP handlers and the store/cache backends.

mod events;
mod identity;

pub use events::EventService;

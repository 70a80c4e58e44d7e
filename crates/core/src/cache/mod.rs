mod error;
mod invalidation;
mod keys;
mod policy;
mod serialization;
mod traits;

pub use error::{cache_error_to_status_code, CacheError, Result};
pub use invalidation::Mutation;
pub use keys::{event_key, event_rsvp_count_key, events_list_key};
pub use policy::CacheFaultPolicy;
pub use serialization::{deserialize, serialize, SerializationError};
pub use traits::Cache;

//! huddle_client - CLI client for the huddle API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::HuddleClient;
pub use error::{ClientError, Result};

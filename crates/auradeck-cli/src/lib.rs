//! Auradeck terminal client.
//!
//! Wires the onboarding wizard and the swipe deck to an in-memory backend
//! behind a line-oriented command interface.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;

pub use app::{App, Command, Reply, HELP};
pub use backend::InMemoryBackend;
pub use config::{AppConfig, DEFAULT_LOG_FILTER};
pub use error::{Error, Result};

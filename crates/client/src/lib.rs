//! Polling sync client for the Animus companion service.
//!
//! [`StateSyncClient`] keeps a local mirror of the service's emotional and
//! avatar state: one-shot operations (`send_message`, `get_emotion`,
//! `teach`) for user-driven actions, and a cancellable background loop
//! polling the combined avatar snapshot. State transitions are republished
//! on an [`EventBus`] for any number of subscribers.
//!
//! Requests are independent; nothing is retried. A failed call logs,
//! leaves the current snapshots untouched, and the poll loop simply tries
//! again on its next tick.

pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod ports;
pub mod sync;

pub use config::ClientConfig;
pub use error::ApiError;
pub use events::{EventBus, StateEvent};
pub use http::HttpCompanionClient;
pub use ports::CompanionPort;
pub use sync::StateSyncClient;

#[cfg(any(test, feature = "testing"))]
pub use ports::MockCompanionPort;

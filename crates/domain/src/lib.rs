//! Core value objects for the Animus companion service.
//!
//! These types mirror the state the service reports over the wire. They are
//! immutable snapshots: each successful fetch replaces the previous value
//! wholesale, nothing is merged field-by-field.

pub mod avatar;
pub mod emotion;

pub use avatar::{Animation, AvatarState};
pub use emotion::EmotionState;

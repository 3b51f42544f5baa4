//! Wire types for the companion service's HTTP/JSON API.
//!
//! One request/response pair per endpoint. All bodies are UTF-8 JSON with
//! `Content-Type: application/json`. The service reports application-level
//! failure in-band via a `success` flag; transport failures never reach
//! these types.

pub mod requests;
pub mod responses;

pub use requests::{TalkRequest, TeachRequest};
pub use responses::{
    AvatarStateResponse, EmotionResponse, ErrorResponse, HealthResponse, MemoriesResponse,
    StatusResponse, TalkResponse, TeachResponse,
};

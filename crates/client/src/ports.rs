//! Outbound port to the companion service.
//!
//! One method per HTTP endpoint. The production implementation is
//! [`HttpCompanionClient`](crate::HttpCompanionClient); tests mock this
//! trait instead of standing up a server.

use async_trait::async_trait;

use animus_protocol::{
    AvatarStateResponse, EmotionResponse, HealthResponse, MemoriesResponse, StatusResponse,
    TalkResponse, TeachResponse,
};

use crate::error::ApiError;

/// Port for the companion service's HTTP API.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CompanionPort: Send + Sync {
    /// `GET /api/health` - reachability probe.
    async fn health(&self) -> Result<HealthResponse, ApiError>;

    /// `POST /api/talk` - send a message, get the reply and new emotion.
    async fn talk(&self, message: &str) -> Result<TalkResponse, ApiError>;

    /// `GET /api/emotion` - fetch the current emotional state.
    async fn emotion(&self) -> Result<EmotionResponse, ApiError>;

    /// `GET /api/avatar/state` - fetch the combined avatar + emotion snapshot.
    async fn avatar_state(&self) -> Result<AvatarStateResponse, ApiError>;

    /// `POST /api/teach` - store a fact with the given importance.
    async fn teach(&self, content: &str, importance: f32) -> Result<TeachResponse, ApiError>;

    /// `GET /api/status` - service-internal diagnostics.
    async fn status(&self) -> Result<StatusResponse, ApiError>;

    /// `GET /api/memories?limit=N` - most recent stored memories.
    async fn memories(&self, limit: usize) -> Result<MemoriesResponse, ApiError>;
}

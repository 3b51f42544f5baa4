//! HTTP adapter for the companion service API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use animus_protocol::{
    AvatarStateResponse, EmotionResponse, ErrorResponse, HealthResponse, MemoriesResponse,
    StatusResponse, TalkRequest, TalkResponse, TeachRequest, TeachResponse,
};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::ports::CompanionPort;

/// Client for the companion service's HTTP/JSON API.
#[derive(Clone)]
pub struct HttpCompanionClient {
    client: Client,
    base_url: String,
}

impl HttpCompanionClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL this client is configured for.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        decode(response).await
    }
}

/// Check the status, then decode the typed body.
///
/// Non-2xx responses carry the service's error envelope when the failure is
/// application-level; salvage its message so logs show "LLM unavailable"
/// instead of a wall of JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|envelope| envelope.error)
            .unwrap_or(body);
        return Err(ApiError::RequestFailed(format!("{}: {}", status, message)));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl CompanionPort for HttpCompanionClient {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("/api/health").await
    }

    async fn talk(&self, message: &str) -> Result<TalkResponse, ApiError> {
        self.post_json("/api/talk", &TalkRequest::new(message)).await
    }

    async fn emotion(&self) -> Result<EmotionResponse, ApiError> {
        self.get_json("/api/emotion").await
    }

    async fn avatar_state(&self) -> Result<AvatarStateResponse, ApiError> {
        self.get_json("/api/avatar/state").await
    }

    async fn teach(&self, content: &str, importance: f32) -> Result<TeachResponse, ApiError> {
        self.post_json("/api/teach", &TeachRequest::new(content, importance))
            .await
    }

    async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.get_json("/api/status").await
    }

    async fn memories(&self, limit: usize) -> Result<MemoriesResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/memories", self.base_url))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimmed() {
        let config = ClientConfig {
            base_url: "http://localhost:5000/".to_string(),
            ..ClientConfig::default()
        };
        let client = HttpCompanionClient::new(&config);
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}

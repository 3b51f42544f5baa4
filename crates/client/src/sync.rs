//! The polling sync client.
//!
//! Mirrors the companion service's state locally: one-shot operations for
//! user-driven actions and a cancellable background loop that polls the
//! combined avatar + emotion snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use animus_domain::{AvatarState, EmotionState};
use animus_protocol::{AvatarStateResponse, MemoriesResponse, StatusResponse};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::events::{EventBus, StateEvent};
use crate::http::HttpCompanionClient;
use crate::ports::CompanionPort;

type Snapshot<T> = Arc<RwLock<Option<T>>>;

/// Sync client for the companion service.
///
/// Holds at most one current [`EmotionState`] and one current
/// [`AvatarState`]; each successful fetch replaces the prior value
/// wholesale. Requests are independent and never retried: a failed call
/// logs, leaves both snapshots untouched, and the poll loop tries again on
/// its next tick.
///
/// One-shot calls and the poll loop may be in flight concurrently; the
/// snapshots are last-write-wins across them. Poll ticks themselves are
/// serialized - the loop awaits each response before sleeping again - so
/// two poll responses can never race each other.
pub struct StateSyncClient {
    api: Arc<dyn CompanionPort>,
    events: EventBus,
    current_emotion: Snapshot<EmotionState>,
    current_avatar: Snapshot<AvatarState>,
    poll_interval: Duration,
    cancel_token: CancellationToken,
}

impl StateSyncClient {
    /// Conventional importance for taught facts.
    pub const DEFAULT_TEACH_IMPORTANCE: f32 = 0.7;

    /// Create a client talking HTTP to the configured service.
    pub fn new(config: ClientConfig) -> Self {
        let api = Arc::new(HttpCompanionClient::new(&config));
        Self::with_port(api, config.poll_interval)
    }

    /// Create a client over an arbitrary port implementation.
    ///
    /// Used by tests and by callers composing their own transport.
    pub fn with_port(api: Arc<dyn CompanionPort>, poll_interval: Duration) -> Self {
        Self {
            api,
            events: EventBus::new(),
            current_emotion: Arc::new(RwLock::new(None)),
            current_avatar: Arc::new(RwLock::new(None)),
            poll_interval,
            cancel_token: CancellationToken::new(),
        }
    }

    /// The bus this client publishes state changes on.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Start background work: a one-off reachability probe, and the poll
    /// loop if the configured interval is non-zero.
    ///
    /// The probe is diagnostic only - its outcome is logged and gates
    /// nothing. Call once; tasks run until [`shutdown`](Self::shutdown) or
    /// drop.
    pub fn start(&self) {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.health().await {
                Ok(health) => {
                    tracing::info!(
                        "Companion service reachable (status: {}, llm_available: {})",
                        health.status,
                        health.llm_available
                    );
                }
                Err(e) => {
                    tracing::warn!("Companion service unreachable: {}", e);
                }
            }
        });

        if self.poll_interval.is_zero() {
            tracing::debug!("Avatar polling disabled (zero interval)");
            return;
        }

        let api = self.api.clone();
        let events = self.events.clone();
        let emotion_slot = self.current_emotion.clone();
        let avatar_slot = self.current_avatar.clone();
        let interval = self.poll_interval;
        let cancel = self.cancel_token.clone();
        tokio::spawn(async move {
            Self::poll_loop(api, events, emotion_slot, avatar_slot, interval, cancel).await;
        });
    }

    /// Cancel the poll loop. Any in-flight poll is abandoned; no further
    /// tick is scheduled.
    pub fn shutdown(&self) {
        tracing::debug!("Shutting down state sync client");
        self.cancel_token.cancel();
    }

    /// Send a message to the companion and return its reply.
    ///
    /// On success the current emotion is replaced and "emotion changed"
    /// then "response received" are published. On any failure the current
    /// state is left untouched.
    pub async fn send_message(&self, message: &str) -> Result<String, ApiError> {
        let response = match self.api.talk(message).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Talk request failed: {}", e);
                return Err(e);
            }
        };

        if !response.success {
            tracing::warn!("Talk request rejected by service");
            return Err(ApiError::Service("talk request rejected".to_string()));
        }

        self.replace_emotion(response.emotion).await;
        self.events
            .dispatch(StateEvent::ResponseReceived(response.response.clone()))
            .await;
        Ok(response.response)
    }

    /// Fetch the current emotional state from the service.
    ///
    /// Replaces the current emotion and publishes "emotion changed".
    pub async fn get_emotion(&self) -> Result<EmotionState, ApiError> {
        let response = match self.api.emotion().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Emotion fetch failed: {}", e);
                return Err(e);
            }
        };

        if !response.success {
            tracing::warn!("Emotion fetch rejected by service");
            return Err(ApiError::Service("emotion fetch rejected".to_string()));
        }

        self.replace_emotion(response.emotion.clone()).await;
        Ok(response.emotion)
    }

    /// Teach the companion a fact and return its acknowledgement.
    ///
    /// No emotion side effect; pass
    /// [`DEFAULT_TEACH_IMPORTANCE`](Self::DEFAULT_TEACH_IMPORTANCE) unless
    /// the caller has a reason to weight differently.
    pub async fn teach(&self, content: &str, importance: f32) -> Result<String, ApiError> {
        let response = match self.api.teach(content, importance).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Teach request failed: {}", e);
                return Err(e);
            }
        };

        if !response.success {
            tracing::warn!("Teach request rejected by service");
            return Err(ApiError::Service("teach request rejected".to_string()));
        }

        Ok(response.response)
    }

    /// Fetch service diagnostics. No state side effects.
    pub async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.api.status().await
    }

    /// Fetch the most recent stored memories. No state side effects.
    pub async fn memories(&self, limit: usize) -> Result<MemoriesResponse, ApiError> {
        self.api.memories(limit).await
    }

    /// Last-known emotional state, or `None` before the first successful
    /// fetch.
    pub async fn current_emotion(&self) -> Option<EmotionState> {
        self.current_emotion.read().await.clone()
    }

    /// Last-known avatar state, or `None` before the first successful poll.
    pub async fn current_avatar_state(&self) -> Option<AvatarState> {
        self.current_avatar.read().await.clone()
    }

    async fn replace_emotion(&self, emotion: EmotionState) {
        *self.current_emotion.write().await = Some(emotion.clone());
        self.events
            .dispatch(StateEvent::EmotionChanged(emotion))
            .await;
    }

    async fn poll_loop(
        api: Arc<dyn CompanionPort>,
        events: EventBus,
        emotion_slot: Snapshot<EmotionState>,
        avatar_slot: Snapshot<AvatarState>,
        interval: Duration,
        cancel: CancellationToken,
    ) {
        tracing::debug!(
            "Starting avatar poll loop ({}ms interval)",
            interval.as_millis()
        );
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                result = api.avatar_state() => {
                    Self::apply_poll_result(result, &events, &emotion_slot, &avatar_slot).await;
                }
            }
        }
        tracing::debug!("Avatar poll loop shut down");
    }

    async fn apply_poll_result(
        result: Result<AvatarStateResponse, ApiError>,
        events: &EventBus,
        emotion_slot: &Snapshot<EmotionState>,
        avatar_slot: &Snapshot<AvatarState>,
    ) {
        match result {
            Ok(snapshot) if snapshot.success => {
                *avatar_slot.write().await = Some(snapshot.avatar.clone());
                *emotion_slot.write().await = Some(snapshot.emotion.clone());
                events
                    .dispatch(StateEvent::AvatarChanged(snapshot.avatar))
                    .await;
                events
                    .dispatch(StateEvent::EmotionChanged(snapshot.emotion))
                    .await;
            }
            Ok(_) => {
                tracing::warn!("Avatar state poll rejected by service");
            }
            Err(e) => {
                tracing::warn!("Avatar state poll failed: {}", e);
            }
        }
    }
}

impl Drop for StateSyncClient {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

//! Response bodies returned by the companion service.
//!
//! Every operational endpoint reports application-level failure in-band
//! with a `success` flag; a well-formed body with `success: false` is the
//! service saying "I heard you, but no". Decode tolerates extra fields so
//! the client keeps working when the service grows its payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use animus_domain::{AvatarState, EmotionState};

/// Body of a successful `POST /api/talk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkResponse {
    /// The companion's conversational reply
    pub response: String,
    /// Emotional state after processing the message
    pub emotion: EmotionState,
    pub success: bool,
}

/// Body of `GET /api/emotion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResponse {
    pub emotion: EmotionState,
    #[serde(default = "default_true")]
    pub success: bool,
}

/// Body of `GET /api/avatar/state` - the combined poll snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarStateResponse {
    pub avatar: AvatarState,
    pub emotion: EmotionState,
    pub success: bool,
}

/// Body of a successful `POST /api/teach`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachResponse {
    /// The companion's acknowledgement
    pub response: String,
    pub success: bool,
}

/// Body of `GET /api/health`.
///
/// Reachability is what matters; the flags are diagnostics. Any 2xx from
/// this endpoint counts as healthy even if the body fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    /// Whether the service's backing LLM is reachable
    #[serde(default)]
    pub llm_available: bool,
}

/// Body of `GET /api/status`.
///
/// The status payload is a service-internal diagnostic dictionary with no
/// stable schema; it is carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Value,
    #[serde(default = "default_true")]
    pub success: bool,
}

/// Body of `GET /api/memories?limit=N`.
///
/// Memory records are service-internal dictionaries (text, importance,
/// emotion at storage time, ...); carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoriesResponse {
    pub memories: Vec<Value>,
    #[serde(default = "default_true")]
    pub success: bool,
}

/// Error envelope the service attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub success: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_talk_response() {
        let json = r#"{
            "response": "hi",
            "emotion": {"valence": 0.5, "label": "calm"},
            "success": true
        }"#;
        let decoded: TalkResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.response, "hi");
        assert_eq!(decoded.emotion.label, "calm");
        assert!(decoded.success);
    }

    #[test]
    fn test_decode_avatar_state_response() {
        let json = r#"{
            "avatar": {"expression": "curious", "animation": "thinking"},
            "emotion": {"label": "curious", "curiosity": 0.9},
            "success": true
        }"#;
        let decoded: AvatarStateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.avatar.expression, "curious");
        assert_eq!(decoded.emotion.curiosity, 0.9);
    }

    #[test]
    fn test_decode_error_envelope() {
        let decoded: ErrorResponse =
            serde_json::from_str(r#"{"error": "message is required", "success": false}"#).unwrap();
        assert_eq!(decoded.error, "message is required");
        assert!(!decoded.success);
    }

    #[test]
    fn test_health_tolerates_extra_fields() {
        let decoded: HealthResponse =
            serde_json::from_str(r#"{"status": "ok", "llm_available": true, "uptime": 12}"#)
                .unwrap();
        assert_eq!(decoded.status, "ok");
        assert!(decoded.llm_available);
    }

    #[test]
    fn test_status_payload_is_opaque() {
        let json = r#"{
            "status": {"memory": {"short_term": 3, "long_term": 41}, "llm_available": true},
            "success": true
        }"#;
        let decoded: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.status["memory"]["long_term"], 41);
    }
}

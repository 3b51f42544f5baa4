//! Request bodies sent to the companion service.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/talk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkRequest {
    /// The user's message
    pub message: String,
}

impl TalkRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /api/teach`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachRequest {
    /// The fact or correction to store
    pub content: String,
    /// How strongly to weight the fact in memory (0.0-1.0)
    pub importance: f32,
}

impl TeachRequest {
    pub fn new(content: impl Into<String>, importance: f32) -> Self {
        Self {
            content: content.into(),
            importance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talk_request_wire_shape() {
        let body = serde_json::to_value(TalkRequest::new("hello")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "hello"}));
    }

    #[test]
    fn test_teach_request_wire_shape() {
        let body = serde_json::to_value(TeachRequest::new("the sky is blue", 0.7)).unwrap();
        assert_eq!(body["content"], "the sky is blue");
        assert_eq!(body["importance"], 0.7);
    }
}

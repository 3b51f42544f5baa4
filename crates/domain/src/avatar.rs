//! Visual state of the embodied avatar.
//!
//! The service maps its internal emotion onto an expression and animation;
//! the client consumes the result as-is and drives whatever rendering layer
//! sits on top.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the avatar's visual configuration.
///
/// Replaced wholesale on each successful poll. `expression` and
/// `mouth_shape` are open vocabularies chosen service-side; `animation` is
/// normally one of the [`Animation`] values but is kept as a raw string so
/// newer servers can extend the set without breaking decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarState {
    /// Facial expression ("neutral", "curious", "cheerful", ...)
    pub expression: String,
    /// Current animation cycle
    pub animation: String,
    /// Intensity of the expression (0.0-1.0)
    pub intensity: f32,
    /// Eye glow, 1.0 = fully lit
    pub eye_brightness: f32,
    /// Mouth pose ("neutral", "smile", ...)
    pub mouth_shape: String,
    /// Head tilt, -1.0 (left) to 1.0 (right)
    pub head_tilt: f32,
}

impl Default for AvatarState {
    fn default() -> Self {
        Self {
            expression: "neutral".to_string(),
            animation: Animation::Idle.as_str().to_string(),
            intensity: 0.5,
            eye_brightness: 1.0,
            mouth_shape: "neutral".to_string(),
            head_tilt: 0.0,
        }
    }
}

impl AvatarState {
    /// Classify the raw animation string, if it is one the client knows.
    pub fn animation_kind(&self) -> Option<Animation> {
        self.animation.parse().ok()
    }

    /// One-line summary for terminal display.
    pub fn summary(&self) -> String {
        format!(
            "{} / {} (intensity {:.2})",
            self.expression, self.animation, self.intensity
        )
    }
}

/// Animation cycles the service drives the avatar through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    /// Resting cycle
    #[default]
    Idle,
    /// Working on a reply
    Thinking,
    /// Delivering a reply
    Speaking,
    /// Attending to user input
    Listening,
}

impl Animation {
    /// All animation cycles, for UI pickers.
    pub fn all() -> &'static [Animation] {
        &[
            Animation::Idle,
            Animation::Thinking,
            Animation::Speaking,
            Animation::Listening,
        ]
    }

    /// Wire name of this animation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Animation::Idle => "idle",
            Animation::Thinking => "thinking",
            Animation::Speaking => "speaking",
            Animation::Listening => "listening",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Animation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(Animation::Idle),
            "thinking" => Ok(Animation::Thinking),
            "speaking" => Ok(Animation::Speaking),
            "listening" => Ok(Animation::Listening),
            _ => Err(format!("Unknown animation: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_pose_defaults() {
        let avatar = AvatarState::default();
        assert_eq!(avatar.expression, "neutral");
        assert_eq!(avatar.animation, "idle");
        assert_eq!(avatar.eye_brightness, 1.0);
        assert_eq!(avatar.head_tilt, 0.0);
    }

    #[test]
    fn test_animation_parse() {
        assert_eq!("idle".parse::<Animation>().unwrap(), Animation::Idle);
        assert_eq!("SPEAKING".parse::<Animation>().unwrap(), Animation::Speaking);
        assert!("backflip".parse::<Animation>().is_err());
    }

    #[test]
    fn test_animation_kind_tolerates_unknown() {
        let mut avatar = AvatarState::default();
        assert_eq!(avatar.animation_kind(), Some(Animation::Idle));

        avatar.animation = "backflip".to_string();
        assert_eq!(avatar.animation_kind(), None);
    }

    #[test]
    fn test_decode_from_service_payload() {
        let json = r#"{
            "expression": "cheerful",
            "animation": "speaking",
            "intensity": 0.8,
            "eye_brightness": 1.0,
            "mouth_shape": "smile",
            "head_tilt": 0.3
        }"#;
        let avatar: AvatarState = serde_json::from_str(json).unwrap();
        assert_eq!(avatar.animation_kind(), Some(Animation::Speaking));
        assert_eq!(avatar.mouth_shape, "smile");
    }
}

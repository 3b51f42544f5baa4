//! Emotional state reported by the companion service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the companion's emotional state.
///
/// All scalar dimensions are nominally in `0.0..=1.0` with `0.5` as the
/// neutral midpoint (`attachment` rests lower, at `0.3`). The `label` is a
/// categorical summary computed service-side; the client never derives it.
///
/// The service may attach extra fields (trigger, timestamp); they are
/// ignored on decode. Missing fields take the neutral defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionState {
    /// Negative (0.0) to positive (1.0)
    pub valence: f32,
    /// Calm (0.0) to intense (1.0)
    pub arousal: f32,
    /// Passive (0.0) to active (1.0)
    pub dominance: f32,
    /// Trust toward the user
    pub confidence: f32,
    /// Curiosity
    pub curiosity: f32,
    /// Contextual attachment
    pub attachment: f32,
    /// Overall intensity of the emotion
    pub intensity: f32,
    /// Categorical label ("calm", "curious", ...)
    pub label: String,
}

impl Default for EmotionState {
    fn default() -> Self {
        Self::neutral()
    }
}

impl EmotionState {
    /// The service's resting state.
    pub fn neutral() -> Self {
        Self {
            valence: 0.5,
            arousal: 0.5,
            dominance: 0.5,
            confidence: 0.5,
            curiosity: 0.5,
            attachment: 0.3,
            intensity: 0.5,
            label: "neutral".to_string(),
        }
    }

    /// One-line summary for terminal display.
    pub fn summary(&self) -> String {
        format!(
            "{} (valence {:.2}, arousal {:.2}, intensity {:.2})",
            self.label, self.valence, self.arousal, self.intensity
        )
    }
}

impl fmt::Display for EmotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

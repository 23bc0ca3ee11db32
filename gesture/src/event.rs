use serde::Serialize;

use crate::landmark::Handedness;
use crate::vocabulary::{Category, SignLabel, Vocabulary};

/// A confirmed sign, emitted once per performed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionEvent {
    pub label: SignLabel,
    /// Time of the frame that completed the window, in milliseconds.
    #[serde(rename = "timestamp")]
    pub timestamp_ms: u64,
    /// Agreement of the window at the moment of confirmation, 0.0..=1.0.
    pub ratio: f32,
    /// Hand whose frame completed the window. `None` when the filter was
    /// fed directly rather than through a pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handedness: Option<Handedness>,
}

impl DetectionEvent {
    /// Whether the label is filed under [`Category::Emergency`] in `vocabulary`.
    pub fn is_emergency(&self, vocabulary: &Vocabulary) -> bool {
        vocabulary
            .entry(self.label)
            .is_some_and(|e| e.category == Category::Emergency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(label: &'static str) -> DetectionEvent {
        DetectionEvent {
            label: SignLabel::new(label),
            timestamp_ms: 20,
            ratio: 1.0,
            handedness: None,
        }
    }

    #[test]
    fn emergency_lookup() {
        let vocab = Vocabulary::reference();
        assert!(event("help").is_emergency(&vocab));
        assert!(event("doctor").is_emergency(&vocab));
        assert!(!event("hello").is_emergency(&vocab));
        assert!(!event("unknown").is_emergency(&vocab));
    }

    #[test]
    fn serializes_as_flat_object() {
        let json = serde_json::to_value(event("hello")).unwrap();
        assert_eq!(json["label"], "hello");
        assert_eq!(json["timestamp"], 20);
        assert_eq!(json["ratio"], 1.0);
        assert!(json.get("handedness").is_none());

        let mut e = event("water");
        e.handedness = Some(Handedness::Left);
        let json = serde_json::to_value(e).unwrap();
        assert_eq!(json["handedness"], "Left");
    }
}

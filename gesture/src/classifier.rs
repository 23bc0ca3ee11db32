use std::sync::Arc;

use crate::error::Result;
use crate::hand::Hand;
use crate::landmark::HandFrame;
use crate::vocabulary::{SignLabel, Vocabulary};

/// Maps one hand to at most one sign label.
///
/// Rules are tried in vocabulary order and the first matching predicate
/// wins. There is no scoring: when several predicates hold for the same
/// hand, the earlier declaration shadows the later ones.
#[derive(Debug, Clone)]
pub struct Classifier {
    vocabulary: Arc<Vocabulary>,
}

impl Classifier {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Classifier over [`Vocabulary::reference`].
    pub fn reference() -> Self {
        Self::new(Arc::new(Vocabulary::reference()))
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Returns the first matching label, or `None` when nothing matches.
    ///
    /// Fails with [`crate::GestureError::InvalidInput`] when the frame does
    /// not carry exactly 21 landmarks.
    pub fn classify(&self, frame: &HandFrame) -> Result<Option<SignLabel>> {
        let hand = Hand::new(frame)?;
        Ok(self.classify_hand(&hand))
    }

    pub fn classify_hand(&self, hand: &Hand<'_>) -> Option<SignLabel> {
        self.vocabulary
            .rules()
            .find(|rule| rule.matches(hand))
            .map(|rule| rule.label())
    }

    /// Every matching label in vocabulary order. Useful for auditing
    /// which signs a given hand shape is ambiguous between.
    pub fn classify_all(&self, frame: &HandFrame) -> Result<Vec<SignLabel>> {
        let hand = Hand::new(frame)?;
        Ok(self
            .vocabulary
            .rules()
            .filter(|rule| rule.matches(&hand))
            .map(|rule| rule.label())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Finger, Handedness, Landmark};
    use crate::pose::PoseBuilder;
    use crate::GestureError;

    fn two_rule_vocab() -> Arc<Vocabulary> {
        Arc::new(
            Vocabulary::builder()
                .sign("index_up", |h| h.is_extended(Finger::Index))
                .sign("any_hand", |_| true)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn first_match_wins() {
        let classifier = Classifier::new(two_rule_vocab());
        let frame = PoseBuilder::open().build();
        assert_eq!(
            classifier.classify(&frame).unwrap(),
            Some(SignLabel::new("index_up"))
        );
        let all = classifier.classify_all(&frame).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn falls_through_to_later_rule() {
        let classifier = Classifier::new(two_rule_vocab());
        let frame = PoseBuilder::fist().build();
        assert_eq!(
            classifier.classify(&frame).unwrap(),
            Some(SignLabel::new("any_hand"))
        );
    }

    #[test]
    fn no_match_is_none() {
        let vocab = Vocabulary::builder()
            .sign("never", |_| false)
            .build()
            .unwrap();
        let classifier = Classifier::new(Arc::new(vocab));
        let frame = PoseBuilder::open().build();
        assert_eq!(classifier.classify(&frame).unwrap(), None);
    }

    #[test]
    fn malformed_frame_is_invalid_input() {
        let classifier = Classifier::reference();
        let frame = HandFrame::new(vec![Landmark::default(); 22], Handedness::Left);
        let err = classifier.classify(&frame).unwrap_err();
        assert!(matches!(
            err,
            GestureError::InvalidInput {
                expected: 21,
                got: 22
            }
        ));
    }

    #[test]
    fn reference_classifier_recognizes_open_palm() {
        let classifier = Classifier::reference();
        let frame = PoseBuilder::open().build();
        assert_eq!(
            classifier.classify(&frame).unwrap(),
            Some(SignLabel::new("hello"))
        );
    }
}

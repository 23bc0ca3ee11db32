//! The closed set of recognizable signs and their predicates.

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{GestureError, Result};
use crate::hand::Hand;

/// Identifier of one sign in a vocabulary, e.g. `"thank_you"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignLabel(&'static str);

impl SignLabel {
    pub const fn new(label: &'static str) -> Self {
        Self(label)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SignLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for SignLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl From<&'static str> for SignLabel {
    fn from(label: &'static str) -> Self {
        Self(label)
    }
}

/// Theme a sign is taught under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greetings,
    Needs,
    Emergency,
    People,
    Emotions,
    Numbers,
    Colors,
    Common,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greetings => "greetings",
            Category::Needs => "needs",
            Category::Emergency => "emergency",
            Category::People => "people",
            Category::Emotions => "emotions",
            Category::Numbers => "numbers",
            Category::Colors => "colors",
            Category::Common => "common",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Output language for a recognized sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

/// Descriptive data for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignEntry {
    pub label: SignLabel,
    /// English display word.
    pub word: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    /// How the sign is performed.
    pub description: &'static str,
    /// Hindi gloss.
    pub hindi: &'static str,
}

impl SignEntry {
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.word,
            Language::Hindi => self.hindi,
        }
    }
}

/// A boolean geometric test over one hand.
pub trait Predicate: Send + Sync {
    fn matches(&self, hand: &Hand<'_>) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Hand<'_>) -> bool + Send + Sync,
{
    fn matches(&self, hand: &Hand<'_>) -> bool {
        self(hand)
    }
}

/// A sign paired with the predicate that recognizes it.
pub struct SignRule {
    entry: SignEntry,
    predicate: Box<dyn Predicate>,
}

impl SignRule {
    pub fn entry(&self) -> &SignEntry {
        &self.entry
    }

    pub fn label(&self) -> SignLabel {
        self.entry.label
    }

    pub fn matches(&self, hand: &Hand<'_>) -> bool {
        self.predicate.matches(hand)
    }
}

impl fmt::Debug for SignRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignRule")
            .field("label", &self.entry.label)
            .finish_non_exhaustive()
    }
}

/// An immutable, ordered list of sign rules.
///
/// Order is significant: the classifier returns the first rule whose
/// predicate matches, so earlier rules shadow later ones that overlap.
#[derive(Debug)]
pub struct Vocabulary {
    rules: Vec<SignRule>,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &SignRule> {
        self.rules.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = SignLabel> + '_ {
        self.rules.iter().map(|r| r.label())
    }

    pub fn get(&self, label: SignLabel) -> Option<&SignRule> {
        self.rules.iter().find(|r| r.label() == label)
    }

    /// Looks up a rule by its string identifier.
    pub fn find(&self, label: &str) -> Option<&SignRule> {
        self.rules.iter().find(|r| r.label().as_str() == label)
    }

    pub fn entry(&self, label: SignLabel) -> Option<&SignEntry> {
        self.get(label).map(|r| r.entry())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &SignEntry> {
        self.rules
            .iter()
            .map(|r| r.entry())
            .filter(move |e| e.category == category)
    }

    /// Display text for a recognized label.
    pub fn translate(&self, label: SignLabel, language: Language) -> Option<&'static str> {
        self.entry(label).map(|e| e.text(language))
    }

    /// Position of a label in evaluation order.
    pub fn position(&self, label: SignLabel) -> Option<usize> {
        self.rules.iter().position(|r| r.label() == label)
    }
}

/// Collects rules in order and checks label uniqueness.
#[derive(Default)]
pub struct VocabularyBuilder {
    rules: Vec<SignRule>,
}

impl VocabularyBuilder {
    pub fn rule<P>(mut self, entry: SignEntry, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.rules.push(SignRule {
            entry,
            predicate: Box::new(predicate),
        });
        self
    }

    /// Shorthand for a rule with only a label; descriptive fields are filled
    /// from the label itself.
    pub fn sign<F>(self, label: &'static str, predicate: F) -> Self
    where
        F: Fn(&Hand<'_>) -> bool + Send + Sync + 'static,
    {
        let entry = SignEntry {
            label: SignLabel::new(label),
            word: label,
            category: Category::Common,
            difficulty: Difficulty::Beginner,
            description: "",
            hindi: "",
        };
        self.rule(entry, predicate)
    }

    pub fn build(self) -> Result<Vocabulary> {
        let mut seen = HashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !seen.insert(rule.label()) {
                return Err(GestureError::InvalidConfig(format!(
                    "duplicate sign label: {}",
                    rule.label()
                )));
            }
        }
        Ok(Vocabulary { rules: self.rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declaration_order() {
        let vocab = Vocabulary::builder()
            .sign("b", |_| true)
            .sign("a", |_| true)
            .sign("c", |_| false)
            .build()
            .unwrap();
        let labels: Vec<&str> = vocab.labels().map(|l| l.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(vocab.position(SignLabel::new("c")), Some(2));
    }

    #[test]
    fn builder_rejects_duplicate_labels() {
        let err = Vocabulary::builder()
            .sign("hello", |_| true)
            .sign("hello", |_| false)
            .build()
            .unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
        assert!(err.to_string().contains("hello"));
    }

    #[test]
    fn label_serializes_as_string() {
        let json = serde_json::to_string(&SignLabel::new("thank_you")).unwrap();
        assert_eq!(json, "\"thank_you\"");
    }

    #[test]
    fn entry_text_by_language() {
        let entry = SignEntry {
            label: SignLabel::new("water"),
            word: "Water",
            category: Category::Needs,
            difficulty: Difficulty::Beginner,
            description: "W shape at the mouth",
            hindi: "पानी",
        };
        assert_eq!(entry.text(Language::English), "Water");
        assert_eq!(entry.text(Language::Hindi), "पानी");
    }

    #[test]
    fn find_by_string() {
        let vocab = Vocabulary::builder()
            .sign("yes", |_| true)
            .build()
            .unwrap();
        assert!(vocab.find("yes").is_some());
        assert!(vocab.find("no").is_none());
    }
}

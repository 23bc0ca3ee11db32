//! Static hand-sign recognition over hand-landmark frames.
//!
//! # Architecture
//!
//! Each frame is processed in three stages:
//!
//! 1. [`Classifier::classify`]: 21 hand landmarks -> at most one [`SignLabel`],
//!    the first rule in [`Vocabulary`] order whose predicate matches
//! 2. [`StabilityFilter::observe`]: sliding window of raw labels -> a
//!    [`DetectionEvent`] once a label dominates the window and the cooldown
//!    has elapsed
//! 3. [`Pipeline::tick`]: runs both for every hand in a frame, reports
//!    events to listeners and exposes in-progress [`Progress`]
//!
//! # Predicates
//!
//! Signs are recognized with geometric heuristics over a single frame, built
//! from the primitives in [`hand`]:
//!
//! ```text
//! extended  tip above its PIP joint (thumb: above its IP joint)
//! folded    tip below its PIP joint
//! together  horizontal tip spread < 0.04
//! touching  tip distance < 0.05
//! region    wrist inside an x/y band, e.g. chest = (0.3..0.7, 0.4..0.8)
//! ```
//!
//! Several predicates can hold for the same hand. Declaration order decides:
//! the reference vocabulary checks `hello`, `thank_you`, `yes`, `no`,
//! `please` and `sorry` first.

mod classifier;
mod config;
mod error;
mod event;
pub mod hand;
pub mod landmark;
mod pipeline;
pub mod pose;
mod signs;
mod stability;
mod vocabulary;

pub use classifier::Classifier;
pub use config::{
    HandRouting, PipelineConfig, StabilityConfig, DEFAULT_AGREEMENT_RATIO, DEFAULT_COOLDOWN_MS,
    DEFAULT_STABILITY_WINDOW,
};
pub use error::{GestureError, Result};
pub use event::DetectionEvent;
pub use hand::Hand;
pub use landmark::{Finger, HandFrame, Handedness, Landmark, Tick, LANDMARK_COUNT};
pub use pipeline::{DetectionCallback, Pipeline, PipelineState};
pub use stability::{FilterPhase, Progress, StabilityFilter, StabilityState};
pub use vocabulary::{
    Category, Difficulty, Language, Predicate, SignEntry, SignLabel, SignRule, Vocabulary,
    VocabularyBuilder,
};

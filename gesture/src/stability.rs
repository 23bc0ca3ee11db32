use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::StabilityConfig;
use crate::error::Result;
use crate::event::DetectionEvent;
use crate::vocabulary::SignLabel;

/// Mutable state of one recognition session.
///
/// Owned by exactly one [`StabilityFilter`]. `history` never holds more
/// than the configured window; `confirmed` and `last_emission_ms` only
/// change when an event is emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StabilityState {
    history: VecDeque<Option<SignLabel>>,
    confirmed: Option<SignLabel>,
    last_emission_ms: Option<u64>,
}

impl StabilityState {
    /// Raw labels in the window, oldest first. `None` marks a frame with no
    /// recognized sign.
    pub fn history(&self) -> impl Iterator<Item = Option<SignLabel>> + '_ {
        self.history.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The most recently emitted label.
    pub fn confirmed(&self) -> Option<SignLabel> {
        self.confirmed
    }

    pub fn last_emission_ms(&self) -> Option<u64> {
        self.last_emission_ms
    }

    fn count(&self, label: SignLabel) -> usize {
        self.history.iter().filter(|l| **l == Some(label)).count()
    }

    /// Forgets everything, as at session start.
    pub fn reset(&mut self) {
        self.history.clear();
        self.confirmed = None;
        self.last_emission_ms = None;
    }
}

/// Whether an emission is still holding off the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPhase {
    /// No cooldown active.
    Idle,
    /// An event was emitted less than `cooldown_ms` ago.
    Cooling,
}

/// In-progress view for UI feedback before a sign is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Progress {
    /// Latest recognized label still in the window.
    pub pending: Option<SignLabel>,
    /// Share of the full window held by `pending`, 0.0..=1.0.
    pub ratio: f32,
}

impl Progress {
    /// `ratio` as a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }
}

/// Turns a noisy per-frame label stream into discrete sign events.
///
/// # Algorithm
///
/// Each [`StabilityFilter::observe`] call appends the raw label to a sliding
/// window of the last `stability_window` frames. A label is emitted when
/// all of these hold:
///
/// - it is a real label, not `None`;
/// - the window is full and the label holds at least `agreement_ratio` of it;
/// - `cooldown_ms` has elapsed since the previous emission (or there was none);
/// - it differs from the previously emitted label, unless `allow_repeat` is set.
///
/// Emitting clears the window, so the next sign has to build up stability
/// from scratch.
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    config: StabilityConfig,
    state: StabilityState,
}

impl StabilityFilter {
    /// Creates a filter after validating `config`.
    pub fn new(config: StabilityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    pub(crate) fn with_valid_config(config: StabilityConfig) -> Self {
        Self {
            state: StabilityState::default(),
            config,
        }
    }

    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    pub fn state(&self) -> &StabilityState {
        &self.state
    }

    /// Feeds one frame's raw label. Returns an event when the label is
    /// confirmed by this frame.
    pub fn observe(&mut self, raw: Option<SignLabel>, now_ms: u64) -> Option<DetectionEvent> {
        let window = self.config.stability_window;
        self.state.history.push_back(raw);
        while self.state.history.len() > window {
            self.state.history.pop_front();
        }

        let label = raw?;
        let count = self.state.count(label);
        let len = self.state.history.len();
        let ratio = count as f32 / len as f32;
        trace!(
            "observe {} at {}ms: {}/{} (window {})",
            label, now_ms, count, len, window
        );

        if len < window || ratio < self.config.agreement_ratio {
            return None;
        }
        if !self.cooled_down(now_ms) {
            return None;
        }
        if !self.config.allow_repeat && self.state.confirmed == Some(label) {
            return None;
        }

        self.state.confirmed = Some(label);
        self.state.last_emission_ms = Some(now_ms);
        self.state.history.clear();
        debug!("confirmed {} at {}ms (ratio {:.2})", label, now_ms, ratio);

        Some(DetectionEvent {
            label,
            timestamp_ms: now_ms,
            ratio,
            handedness: None,
        })
    }

    fn cooled_down(&self, now_ms: u64) -> bool {
        match self.state.last_emission_ms {
            None => true,
            Some(last) => now_ms
                .checked_sub(last)
                .is_some_and(|elapsed| elapsed >= self.config.cooldown_ms),
        }
    }

    pub fn phase(&self, now_ms: u64) -> FilterPhase {
        if self.cooled_down(now_ms) {
            FilterPhase::Idle
        } else {
            FilterPhase::Cooling
        }
    }

    pub fn progress(&self) -> Progress {
        let Some(pending) = self.state.history.iter().rev().find_map(|l| *l) else {
            return Progress::default();
        };
        Progress {
            pending: Some(pending),
            ratio: self.state.count(pending) as f32 / self.config.stability_window as f32,
        }
    }

    /// Discards all history, the confirmed label and the cooldown.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::with_valid_config(StabilityConfig::default())
    }
}

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classifier::Classifier;
use crate::config::{HandRouting, PipelineConfig};
use crate::error::Result;
use crate::event::DetectionEvent;
use crate::hand::Hand;
use crate::landmark::{HandFrame, Handedness};
use crate::stability::{Progress, StabilityFilter};
use crate::vocabulary::SignLabel;

/// Listener invoked for every confirmed sign.
pub type DetectionCallback = Box<dyn FnMut(&DetectionEvent) + Send>;

/// Lifecycle of a recognition session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Stopped,
    Running,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Stopped => "stopped",
            PipelineState::Running => "running",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stability filters of a running session.
#[derive(Debug)]
enum Filters {
    Shared(StabilityFilter),
    PerHand {
        left: StabilityFilter,
        right: StabilityFilter,
    },
}

/// Drives classification and stability filtering, one tick at a time.
///
/// A pipeline starts [`PipelineState::Stopped`]. [`Pipeline::start`] creates
/// fresh stability state and [`Pipeline::stop`] discards it, so nothing
/// carries over between sessions. Ticks received while stopped are ignored.
///
/// # Example
///
/// ```
/// use signbridge_gesture::{Classifier, Pipeline, PipelineConfig};
/// use signbridge_gesture::pose::PoseBuilder;
///
/// let mut pipeline = Pipeline::new(Classifier::reference(), PipelineConfig::default())
///     .unwrap()
///     .on_detection(|event| println!("{} at {}ms", event.label, event.timestamp_ms));
/// pipeline.start();
///
/// let open = PoseBuilder::open().build();
/// for t in 0..8 {
///     pipeline.tick(std::slice::from_ref(&open), t * 33).unwrap();
/// }
/// ```
pub struct Pipeline {
    classifier: Classifier,
    config: PipelineConfig,
    filters: Option<Filters>,
    callbacks: Vec<DetectionCallback>,
}

impl Pipeline {
    /// Creates a stopped pipeline after validating `config`.
    pub fn new(classifier: Classifier, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier,
            config,
            filters: None,
            callbacks: Vec::new(),
        })
    }

    /// Registers a listener for confirmed signs.
    pub fn on_detection<F>(mut self, f: F) -> Self
    where
        F: FnMut(&DetectionEvent) + Send + 'static,
    {
        self.callbacks.push(Box::new(f));
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn state(&self) -> PipelineState {
        if self.filters.is_some() {
            PipelineState::Running
        } else {
            PipelineState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.filters.is_some()
    }

    /// Begins a session with empty history. Has no effect when already running.
    pub fn start(&mut self) {
        if self.filters.is_some() {
            debug!("pipeline already running");
            return;
        }
        let stability = self.config.stability;
        self.filters = Some(match self.config.routing {
            HandRouting::Shared => Filters::Shared(StabilityFilter::with_valid_config(stability)),
            HandRouting::PerHand => Filters::PerHand {
                left: StabilityFilter::with_valid_config(stability),
                right: StabilityFilter::with_valid_config(stability),
            },
        });
        info!(
            "pipeline started (window={}, ratio={}, cooldown={}ms, routing={:?})",
            self.config.stability.stability_window,
            self.config.stability.agreement_ratio,
            self.config.stability.cooldown_ms,
            self.config.routing
        );
    }

    /// Ends the session and discards all stability state.
    pub fn stop(&mut self) {
        if self.filters.take().is_some() {
            info!("pipeline stopped");
        }
    }

    /// Processes the hands seen in one frame.
    ///
    /// Every hand is validated before any state changes; a malformed hand
    /// fails the whole tick with [`crate::GestureError::InvalidInput`] and
    /// leaves the session as it was. A tick with no hands counts as one
    /// frame without a sign. Returns the events confirmed by this tick, which
    /// have also been passed to every registered listener.
    pub fn tick(&mut self, hands: &[HandFrame], now_ms: u64) -> Result<Vec<DetectionEvent>> {
        let Some(filters) = self.filters.as_mut() else {
            return Ok(Vec::new());
        };

        let observations = hands
            .iter()
            .map(|frame| {
                let hand = Hand::new(frame)?;
                Ok((frame.handedness, self.classifier.classify_hand(&hand)))
            })
            .collect::<Result<Vec<(Handedness, Option<SignLabel>)>>>();
        let observations = match observations {
            Ok(o) => o,
            Err(e) => {
                warn!("dropping tick at {}ms: {}", now_ms, e);
                return Err(e);
            }
        };

        let mut events = Vec::new();
        match filters {
            Filters::Shared(filter) => {
                if observations.is_empty() {
                    events.extend(filter.observe(None, now_ms));
                }
                for (handedness, label) in &observations {
                    events.extend(observe(filter, *label, now_ms, *handedness));
                }
            }
            Filters::PerHand { left, right } => {
                for (side, filter) in [(Handedness::Left, left), (Handedness::Right, right)] {
                    let mut seen = false;
                    for (handedness, label) in &observations {
                        if *handedness == side {
                            seen = true;
                            events.extend(observe(filter, *label, now_ms, side));
                        }
                    }
                    if !seen {
                        filter.observe(None, now_ms);
                    }
                }
            }
        }

        for event in &events {
            info!("detected {} at {}ms", event.label, event.timestamp_ms);
            for callback in &mut self.callbacks {
                callback(event);
            }
        }
        Ok(events)
    }

    /// The in-progress label and its stability, or the most advanced of
    /// the two when routing per hand. Empty while stopped.
    pub fn progress(&self) -> Progress {
        match &self.filters {
            None => Progress::default(),
            Some(Filters::Shared(filter)) => filter.progress(),
            Some(Filters::PerHand { left, right }) => {
                let (l, r) = (left.progress(), right.progress());
                if r.ratio > l.ratio { r } else { l }
            }
        }
    }

    /// Progress of one hand. With shared routing both hands report the
    /// shared filter.
    pub fn progress_for(&self, handedness: Handedness) -> Progress {
        match &self.filters {
            None => Progress::default(),
            Some(Filters::Shared(filter)) => filter.progress(),
            Some(Filters::PerHand { left, right }) => match handedness {
                Handedness::Left => left.progress(),
                Handedness::Right => right.progress(),
            },
        }
    }
}

fn observe(
    filter: &mut StabilityFilter,
    label: Option<SignLabel>,
    now_ms: u64,
    handedness: Handedness,
) -> Option<DetectionEvent> {
    filter.observe(label, now_ms).map(|mut event| {
        event.handedness = Some(handedness);
        event
    })
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("callbacks", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

//! Synthetic hand frames for exercising sign predicates without a tracker.
//!
//! [`PoseBuilder`] lays out a plausible 21-landmark hand around a wrist
//! position from per-finger states. The geometry is fixed and coarse; it is
//! meant to land clearly on one side of every threshold in [`crate::hand`].

use crate::landmark::{Finger, HandFrame, Handedness, Landmark, LANDMARK_COUNT, WRIST};

/// Pose of one of the four non-thumb fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerPose {
    /// Pointing up, tip above the PIP joint.
    Extended,
    /// Bent into the palm, tip below the PIP joint and just above the knuckle.
    Folded,
    /// Pointing toward the pinky side, tip level with the knuckle.
    Sideways,
    /// Hanging down below the knuckle.
    Down,
}

/// Pose of the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbPose {
    /// Folded across the palm.
    Tucked,
    /// Raised alongside the index finger.
    Up,
    /// Held out to the side.
    Out,
}

// Knuckle x offsets from the wrist for index, middle, ring, pinky
// (right hand, palm toward the camera).
const KNUCKLE_X: [f32; 4] = [-0.03, 0.0, 0.03, 0.06];
const SPREAD_FACTOR: f32 = 2.5;

/// Builds a well-formed [`HandFrame`].
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    fingers: [FingerPose; 4],
    thumb: ThumbPose,
    spread: bool,
    wrist: (f32, f32),
    handedness: Handedness,
    palm_away: bool,
    thumb_touch: Option<Finger>,
    overrides: Vec<(usize, Landmark)>,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::fist()
    }
}

impl PoseBuilder {
    /// Closed fist, thumb tucked, right hand off to the side of the torso.
    pub fn fist() -> Self {
        Self {
            fingers: [FingerPose::Folded; 4],
            thumb: ThumbPose::Tucked,
            spread: false,
            wrist: (0.2, 0.6),
            handedness: Handedness::Right,
            palm_away: false,
            thumb_touch: None,
            overrides: Vec::new(),
        }
    }

    /// Open palm: every finger extended and spread, thumb up.
    pub fn open() -> Self {
        Self {
            fingers: [FingerPose::Extended; 4],
            thumb: ThumbPose::Up,
            spread: true,
            ..Self::fist()
        }
    }

    pub fn finger(mut self, finger: Finger, pose: FingerPose) -> Self {
        match finger {
            Finger::Thumb => {
                self.thumb = match pose {
                    FingerPose::Extended | FingerPose::Sideways => ThumbPose::Up,
                    FingerPose::Folded | FingerPose::Down => ThumbPose::Tucked,
                };
            }
            Finger::Index => self.fingers[0] = pose,
            Finger::Middle => self.fingers[1] = pose,
            Finger::Ring => self.fingers[2] = pose,
            Finger::Pinky => self.fingers[3] = pose,
        }
        self
    }

    pub fn extend(self, finger: Finger) -> Self {
        self.finger(finger, FingerPose::Extended)
    }

    pub fn fold(self, finger: Finger) -> Self {
        self.finger(finger, FingerPose::Folded)
    }

    pub fn thumb(mut self, pose: ThumbPose) -> Self {
        self.thumb = pose;
        self
    }

    /// Fan the extended fingertips apart instead of holding them together.
    pub fn spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }

    /// Wrist position in normalized image coordinates.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.wrist = (x, y);
        self
    }

    pub fn handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = handedness;
        self
    }

    /// Turn the back of the hand toward the camera.
    pub fn palm_away(mut self) -> Self {
        self.palm_away = true;
        self
    }

    /// Bring the thumb tip onto another fingertip.
    pub fn touch_thumb_to(mut self, finger: Finger) -> Self {
        self.thumb_touch = Some(finger);
        self
    }

    /// Replace one landmark after layout, in absolute coordinates.
    pub fn set(mut self, index: usize, landmark: Landmark) -> Self {
        self.overrides.push((index, landmark));
        self
    }

    pub fn build(&self) -> HandFrame {
        // Offsets from the wrist, right hand, palm toward the camera.
        let mut offsets = [(0.0_f32, 0.0_f32); LANDMARK_COUNT];

        offsets[1] = (-0.04, -0.03);
        offsets[2] = (-0.07, -0.06);
        offsets[3] = (-0.09, -0.09);
        offsets[4] = match self.thumb {
            ThumbPose::Tucked => (-0.02, -0.07),
            ThumbPose::Up => (-0.08, -0.13),
            ThumbPose::Out => (-0.15, -0.10),
        };

        for (slot, pose) in self.fingers.iter().enumerate() {
            let mcp = 5 + slot * 4;
            let kx = KNUCKLE_X[slot];
            let short = if slot == 3 { 0.8 } else { 1.0 };
            let fan = if self.spread && *pose == FingerPose::Extended {
                SPREAD_FACTOR
            } else {
                1.0
            };
            let tx = kx * fan;
            let joints = match pose {
                FingerPose::Extended => [
                    (kx, -0.12),
                    (tx, -0.12 - 0.05 * short),
                    (tx, -0.12 - 0.08 * short),
                    (tx, -0.12 - 0.11 * short),
                ],
                FingerPose::Folded => [(kx, -0.12), (kx, -0.16), (kx, -0.14), (kx, -0.125)],
                FingerPose::Sideways => [
                    (kx, -0.12),
                    (kx + 0.05, -0.13),
                    (kx + 0.08, -0.133),
                    (kx + 0.11, -0.135),
                ],
                FingerPose::Down => [(kx, -0.12), (kx, -0.10), (kx, -0.08), (kx, -0.06)],
            };
            for (j, joint) in joints.iter().enumerate() {
                offsets[mcp + j] = *joint;
            }
        }

        if let Some(target) = self.thumb_touch {
            let (tx, ty) = offsets[target.tip()];
            offsets[4] = (tx - 0.01, ty + 0.01);
        }

        let mirror = match self.handedness {
            Handedness::Right => 1.0,
            Handedness::Left => -1.0,
        } * if self.palm_away { -1.0 } else { 1.0 };

        let (wx, wy) = self.wrist;
        let mut landmarks: Vec<Landmark> = offsets
            .iter()
            .map(|(dx, dy)| Landmark::new(wx + dx * mirror, wy + dy, 0.0))
            .collect();
        landmarks[WRIST] = Landmark::new(wx, wy, 0.0);

        for (index, landmark) in &self.overrides {
            if *index < LANDMARK_COUNT {
                landmarks[*index] = *landmark;
            }
        }

        HandFrame::new(landmarks, self.handedness)
    }
}

//! Geometric tests over a single validated hand.
//!
//! Every method is a total function of the 21 landmarks: simple comparisons
//! and distances, no history and no allocation. Coordinates are normalized
//! image coordinates, so "above" means a smaller `y`.

use crate::error::{GestureError, Result};
use crate::landmark::{
    Finger, HandFrame, Handedness, Landmark, INDEX_MCP, LANDMARK_COUNT, PINKY_MCP, THUMB_IP,
    THUMB_MCP, THUMB_TIP, WRIST,
};

/// Two landmarks closer than this are considered touching.
pub const TOUCH_DISTANCE: f32 = 0.05;

/// Maximum horizontal spread between two fingertips held together.
pub const TOGETHER_SPREAD: f32 = 0.04;

/// Minimum index-to-pinky tip distance for an open, spread hand.
pub const SPREAD_DISTANCE: f32 = 0.15;

/// A bent finger's tip sits within this distance of its knuckle.
pub const CURL_DISTANCE: f32 = 0.07;

/// Minimum horizontal reach of the thumb tip away from the index knuckle.
pub const THUMB_OUT_REACH: f32 = 0.08;

/// An open interval `(low, high)` over one normalized axis.
pub type Band = (f32, f32);

fn within(v: f32, band: Band) -> bool {
    v > band.0 && v < band.1
}

/// Read-only view over one well-formed hand frame.
#[derive(Debug, Clone, Copy)]
pub struct Hand<'a> {
    landmarks: &'a [Landmark; LANDMARK_COUNT],
    handedness: Handedness,
}

impl<'a> Hand<'a> {
    /// Validates the frame and borrows its landmarks.
    pub fn new(frame: &'a HandFrame) -> Result<Self> {
        let landmarks: &[Landmark; LANDMARK_COUNT] =
            frame.landmarks.as_slice().try_into().map_err(|_| GestureError::InvalidInput {
                expected: LANDMARK_COUNT,
                got: frame.landmarks.len(),
            })?;
        Ok(Self {
            landmarks,
            handedness: frame.handedness,
        })
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn wrist(&self) -> Landmark {
        self.landmarks[WRIST]
    }

    fn tip(&self, finger: Finger) -> Landmark {
        self.landmarks[finger.tip()]
    }

    // ------------------------------------------------------------------
    // Finger state
    // ------------------------------------------------------------------

    /// Tip above its reference joint.
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.tip(finger).y < self.landmarks[finger.reference_joint()].y
    }

    /// Tip below its reference joint.
    pub fn is_folded(&self, finger: Finger) -> bool {
        self.tip(finger).y > self.landmarks[finger.reference_joint()].y
    }

    /// Tip pulled back close to the knuckle without pointing up.
    pub fn is_curled(&self, finger: Finger) -> bool {
        !self.is_extended(finger)
            && self.tip(finger).distance_2d(&self.landmarks[finger.mcp()]) < CURL_DISTANCE
    }

    pub fn count_extended(&self, fingers: &[Finger]) -> usize {
        fingers.iter().filter(|f| self.is_extended(**f)).count()
    }

    pub fn count_folded(&self, fingers: &[Finger]) -> usize {
        fingers.iter().filter(|f| self.is_folded(**f)).count()
    }

    /// The four non-thumb fingers match `extended` exactly: listed fingers
    /// extended, the rest folded. The thumb is not considered.
    pub fn shape(&self, extended: &[Finger]) -> bool {
        Finger::FOUR.iter().all(|f| {
            if extended.contains(f) {
                self.is_extended(*f)
            } else {
                self.is_folded(*f)
            }
        })
    }

    /// Finger points more sideways than vertically (tip relative to knuckle).
    pub fn pointing_sideways(&self, finger: Finger) -> bool {
        let tip = self.tip(finger);
        let mcp = self.landmarks[finger.mcp()];
        (tip.x - mcp.x).abs() > (tip.y - mcp.y).abs()
    }

    /// Finger hangs below its knuckle.
    pub fn pointing_down(&self, finger: Finger) -> bool {
        self.tip(finger).y > self.landmarks[finger.mcp()].y
    }

    // ------------------------------------------------------------------
    // Thumb
    // ------------------------------------------------------------------

    /// Thumb held out to the side, away from the index knuckle.
    pub fn thumb_out(&self) -> bool {
        let reach = (self.landmarks[THUMB_TIP].x - self.landmarks[INDEX_MCP].x).abs();
        let joint = (self.landmarks[THUMB_IP].x - self.landmarks[INDEX_MCP].x).abs();
        reach > THUMB_OUT_REACH && reach > joint
    }

    /// Thumb extended and its tip higher than every other fingertip.
    pub fn thumb_up(&self) -> bool {
        let thumb = self.tip(Finger::Thumb).y;
        self.is_extended(Finger::Thumb) && Finger::FOUR.iter().all(|f| thumb < self.tip(*f).y)
    }

    // ------------------------------------------------------------------
    // Distances
    // ------------------------------------------------------------------

    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.landmarks[a].distance_2d(&self.landmarks[b])
    }

    pub fn touching(&self, a: usize, b: usize) -> bool {
        self.distance(a, b) < TOUCH_DISTANCE
    }

    pub fn tips_touch(&self, a: Finger, b: Finger) -> bool {
        self.touching(a.tip(), b.tip())
    }

    /// Thumb tip on `finger`'s tip and nearer to it than to any other tip.
    pub fn thumb_meets(&self, finger: Finger) -> bool {
        let thumb = self.tip(Finger::Thumb);
        let d = thumb.distance_2d(&self.tip(finger));
        d < TOUCH_DISTANCE
            && Finger::FOUR
                .iter()
                .all(|f| *f == finger || d < thumb.distance_2d(&self.tip(*f)))
    }

    /// Horizontal spread between two fingertips below [`TOGETHER_SPREAD`].
    pub fn fingers_together(&self, a: Finger, b: Finger) -> bool {
        (self.tip(a).x - self.tip(b).x).abs() < TOGETHER_SPREAD
    }

    /// Index, middle, ring and pinky all held side by side.
    pub fn flat(&self) -> bool {
        self.count_extended(&Finger::FOUR) == 4
            && self.fingers_together(Finger::Index, Finger::Middle)
            && self.fingers_together(Finger::Middle, Finger::Ring)
            && self.fingers_together(Finger::Ring, Finger::Pinky)
    }

    /// Index and pinky tips far apart.
    pub fn spread(&self) -> bool {
        self.tip(Finger::Index).distance_2d(&self.tip(Finger::Pinky)) > SPREAD_DISTANCE
    }

    // ------------------------------------------------------------------
    // Position and orientation
    // ------------------------------------------------------------------

    /// Wrist strictly inside both bands.
    pub fn wrist_in(&self, x: Band, y: Band) -> bool {
        let w = self.wrist();
        within(w.x, x) && within(w.y, y)
    }

    /// Hand raised to face height.
    pub fn near_face(&self) -> bool {
        self.wrist().y < 0.35
    }

    /// Hand in front of the chest.
    pub fn at_chest(&self) -> bool {
        self.wrist_in((0.3, 0.7), (0.4, 0.8))
    }

    /// Hand centred on the torso.
    pub fn centered(&self) -> bool {
        self.wrist_in((0.4, 0.6), (0.3, 0.7))
    }

    pub fn upper_half(&self) -> bool {
        self.wrist().y < 0.5
    }

    /// Fingertips at the very top of the image.
    pub fn above_head(&self) -> bool {
        self.tip(Finger::Index).y < 0.1
    }

    pub fn low(&self) -> bool {
        self.wrist().y > 0.8
    }

    /// Wrist outside the central vertical strip.
    pub fn off_center(&self) -> bool {
        !within(self.wrist().x, (0.25, 0.75))
    }

    /// Palm toward the camera, judged by knuckle order across the hand.
    /// The tracker reports handedness as seen in a mirrored selfie view,
    /// so a right palm facing the lens has its thumb knuckle on the left.
    pub fn palm_facing_camera(&self) -> bool {
        let thumb = self.landmarks[THUMB_MCP].x;
        let pinky = self.landmarks[PINKY_MCP].x;
        match self.handedness {
            Handedness::Right => thumb < pinky,
            Handedness::Left => thumb > pinky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{INDEX_TIP, MIDDLE_TIP};
    use crate::pose::PoseBuilder;

    #[test]
    fn rejects_malformed_frame() {
        let frame = HandFrame::new(vec![Landmark::default(); 5], Handedness::Right);
        assert!(Hand::new(&frame).is_err());
    }

    #[test]
    fn open_hand_has_all_fingers_extended() {
        let frame = PoseBuilder::open().build();
        let hand = Hand::new(&frame).unwrap();
        assert_eq!(hand.count_extended(&Finger::ALL), 5);
        assert_eq!(hand.count_folded(&Finger::FOUR), 0);
        assert!(hand.spread());
    }

    #[test]
    fn fist_has_all_fingers_folded() {
        let frame = PoseBuilder::fist().build();
        let hand = Hand::new(&frame).unwrap();
        assert_eq!(hand.count_folded(&Finger::FOUR), 4);
        assert!(hand.shape(&[]));
        assert!(!hand.is_extended(Finger::Index));
    }

    #[test]
    fn shape_matches_only_exact_finger_set() {
        let frame = PoseBuilder::fist()
            .extend(Finger::Index)
            .extend(Finger::Middle)
            .build();
        let hand = Hand::new(&frame).unwrap();
        assert!(hand.shape(&[Finger::Index, Finger::Middle]));
        assert!(!hand.shape(&[Finger::Index]));
        assert!(!hand.shape(&[Finger::Index, Finger::Middle, Finger::Ring]));
    }

    #[test]
    fn touching_tips() {
        let frame = PoseBuilder::open()
            .touch_thumb_to(Finger::Index)
            .build();
        let hand = Hand::new(&frame).unwrap();
        assert!(hand.tips_touch(Finger::Thumb, Finger::Index));
        assert!(!hand.touching(INDEX_TIP, MIDDLE_TIP));
    }

    #[test]
    fn thumb_meets_only_the_nearest_tip() {
        let frame = PoseBuilder::open()
            .spread(false)
            .touch_thumb_to(Finger::Ring)
            .build();
        let hand = Hand::new(&frame).unwrap();
        assert!(hand.thumb_meets(Finger::Ring));
        assert!(hand.tips_touch(Finger::Thumb, Finger::Middle));
        assert!(!hand.thumb_meets(Finger::Middle));
    }

    #[test]
    fn wrist_bands_are_open_intervals() {
        let frame = PoseBuilder::fist().at(0.3, 0.6).build();
        let hand = Hand::new(&frame).unwrap();
        assert!(!hand.at_chest(), "x exactly on the band edge is outside");
        let frame = PoseBuilder::fist().at(0.5, 0.6).build();
        let hand = Hand::new(&frame).unwrap();
        assert!(hand.at_chest());
        assert!(hand.centered());
    }

    #[test]
    fn palm_orientation_depends_on_handedness() {
        let right = PoseBuilder::open().handedness(Handedness::Right).build();
        let left = PoseBuilder::open().handedness(Handedness::Left).build();
        let r = Hand::new(&right).unwrap();
        let l = Hand::new(&left).unwrap();
        assert!(r.palm_facing_camera());
        assert!(l.palm_facing_camera());
    }
}

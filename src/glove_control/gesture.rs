//! Gesture recognition from glove sensor snapshots.
//!
//! Pure decision rules over finger flexion and hand orientation. Rules are
//! checked in a fixed order and the first match wins, so a pose that
//! satisfies several rules resolves deterministically.

use crate::glove_control::driver::{EulerAngles, Handedness};
use crate::glove_control::snapshot::HandSnapshot;
use strum_macros::Display;

/// Discrete hand poses the control loop reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gesture {
    /// Fist with the thumb out, wrist rolled thumb-up.
    ThumbsUp,
    /// Index and middle extended, ring and pinky curled.
    Peace,
    /// Index and pinky extended, middle and ring curled, palm away.
    GoBulls,
    /// Raised fist held palm away.
    Halt,
    /// Flat open palm held level.
    Land,
}

/// Decision thresholds for [`classify`].
///
/// Flexion is normalized to [0, 1] per finger, angles are degrees.
#[derive(Debug, Clone)]
pub struct GestureThresholds {
    /// Minimum flexion difference for one finger to count as curled
    /// relative to another, and the curl ceiling for "extended" fingers.
    pub flexion_delta: f32,
    /// Minimum thumb flexion for PEACE, rules out the fully flat hand.
    pub peace_thumb_min: f32,
    /// Minimum thumb flexion for HALT.
    pub halt_thumb_min: f32,
    /// Minimum summed flexion over all five fingers for HALT.
    pub halt_sum_min: f32,
    /// Per-finger flexion ceiling for the flat open palm.
    pub open_palm_max: f32,
    /// Minimum yaw magnitude for THUMBS_UP. Positive on the left hand,
    /// negative on the right.
    pub thumbs_up_yaw: f32,
    /// Lower pitch bound for palm-away gestures.
    pub palm_away_pitch_min: f32,
    /// Upper pitch bound for palm-away gestures.
    pub palm_away_pitch_max: f32,
    /// Maximum yaw magnitude for palm-away and level gestures.
    pub level_yaw: f32,
    /// Maximum pitch magnitude for the flat open palm.
    pub flat_pitch: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            flexion_delta: 0.243,
            peace_thumb_min: 0.04049,
            halt_thumb_min: 0.12146,
            halt_sum_min: 2.22672,
            open_palm_max: 0.080972,
            thumbs_up_yaw: 60.0,
            palm_away_pitch_min: -120.0,
            palm_away_pitch_max: 0.0,
            level_yaw: 25.0,
            flat_pitch: 25.0,
        }
    }
}

/// Maps one snapshot to a gesture, or `None` when no rule matches.
///
/// All comparisons are inclusive, a reading exactly on a threshold counts.
pub fn classify(
    hand: Handedness,
    snapshot: &HandSnapshot,
    thresholds: &GestureThresholds,
) -> Option<Gesture> {
    if is_thumbs_up(hand, snapshot, thresholds) {
        return Some(Gesture::ThumbsUp);
    }
    if is_peace(snapshot, thresholds) {
        return Some(Gesture::Peace);
    }
    if is_go_bulls(snapshot, thresholds) {
        return Some(Gesture::GoBulls);
    }
    if is_halt(snapshot, thresholds) {
        return Some(Gesture::Halt);
    }
    if is_open_palm(snapshot, thresholds) {
        return Some(Gesture::Land);
    }
    None
}

fn is_thumbs_up(hand: Handedness, snap: &HandSnapshot, t: &GestureThresholds) -> bool {
    let fingers_over_thumb = snap.index() - snap.thumb() >= t.flexion_delta
        && snap.middle() - snap.thumb() >= t.flexion_delta
        && snap.ring() - snap.thumb() >= t.flexion_delta
        && snap.pinky() - snap.thumb() >= t.flexion_delta;
    // The wrist rolls outward, so the yaw sign flips between hands.
    let yaw_ok = match hand {
        Handedness::Left => snap.orientation().yaw >= t.thumbs_up_yaw,
        Handedness::Right => snap.orientation().yaw <= -t.thumbs_up_yaw,
    };
    fingers_over_thumb && yaw_ok
}

fn is_peace(snap: &HandSnapshot, t: &GestureThresholds) -> bool {
    snap.ring() - snap.middle() >= t.flexion_delta
        && snap.pinky() - snap.index() >= t.flexion_delta
        && snap.thumb() >= t.peace_thumb_min
}

fn is_go_bulls(snap: &HandSnapshot, t: &GestureThresholds) -> bool {
    snap.middle() - snap.index() >= t.flexion_delta
        && snap.ring() - snap.pinky() >= t.flexion_delta
        && snap.index() <= t.flexion_delta
        && snap.pinky() <= t.flexion_delta
        && palm_away(snap.orientation(), t)
}

fn is_halt(snap: &HandSnapshot, t: &GestureThresholds) -> bool {
    snap.thumb() >= t.halt_thumb_min
        && snap.index() >= t.flexion_delta
        && snap.middle() >= t.flexion_delta
        && snap.flexion_sum() >= t.halt_sum_min
        && palm_away(snap.orientation(), t)
}

fn is_open_palm(snap: &HandSnapshot, t: &GestureThresholds) -> bool {
    snap.flexion().iter().all(|f| *f <= t.open_palm_max)
        && snap.orientation().pitch.abs() <= t.flat_pitch
        && snap.orientation().yaw.abs() <= t.level_yaw
}

fn palm_away(o: &EulerAngles, t: &GestureThresholds) -> bool {
    o.pitch >= t.palm_away_pitch_min
        && o.pitch <= t.palm_away_pitch_max
        && o.yaw.abs() <= t.level_yaw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(flexion: [f32; 5], pitch: f32, yaw: f32) -> HandSnapshot {
        HandSnapshot::new(flexion, EulerAngles { roll: 0.0, pitch, yaw })
    }

    fn classify_default(hand: Handedness, snapshot: &HandSnapshot) -> Option<Gesture> {
        classify(hand, snapshot, &GestureThresholds::default())
    }

    #[test]
    fn test_flat_open_palm_is_land() {
        let s = snap([0.0; 5], 0.0, 0.0);
        assert_eq!(classify_default(Handedness::Left, &s), Some(Gesture::Land));
        assert_eq!(classify_default(Handedness::Right, &s), Some(Gesture::Land));
    }

    #[test]
    fn test_tilted_open_palm_is_nothing() {
        let s = snap([0.0; 5], 40.0, 0.0);
        assert_eq!(classify_default(Handedness::Left, &s), None);
    }

    #[test]
    fn test_thumbs_up_boundary_is_inclusive() {
        // Every delta sits exactly on the threshold, as does the yaw.
        let s = snap([0.0, 0.243, 0.243, 0.243, 0.243], 0.0, 60.0);
        assert_eq!(
            classify_default(Handedness::Left, &s),
            Some(Gesture::ThumbsUp)
        );
        let s = snap([0.0, 0.243, 0.243, 0.243, 0.243], 0.0, -60.0);
        assert_eq!(
            classify_default(Handedness::Right, &s),
            Some(Gesture::ThumbsUp)
        );
    }

    #[test]
    fn test_thumbs_up_yaw_sign_mirrors_by_hand() {
        let s = snap([0.0, 0.5, 0.5, 0.5, 0.5], 0.0, 75.0);
        assert_eq!(
            classify_default(Handedness::Left, &s),
            Some(Gesture::ThumbsUp)
        );
        // The same pose on the right hand rolls the wrong way.
        assert_eq!(classify_default(Handedness::Right, &s), None);
    }

    #[test]
    fn test_peace_ignores_orientation() {
        let s = snap([0.05, 0.1, 0.1, 0.5, 0.5], 80.0, -170.0);
        assert_eq!(classify_default(Handedness::Left, &s), Some(Gesture::Peace));
    }

    #[test]
    fn test_peace_requires_bent_thumb() {
        let s = snap([0.01, 0.1, 0.1, 0.5, 0.5], 0.0, 0.0);
        assert_eq!(classify_default(Handedness::Left, &s), None);
    }

    #[test]
    fn test_go_bulls_palm_away_window() {
        let horns = [0.3, 0.1, 0.6, 0.7, 0.05];
        let s = snap(horns, -45.0, 0.0);
        assert_eq!(
            classify_default(Handedness::Right, &s),
            Some(Gesture::GoBulls)
        );
        // Palm tilted back out of the window.
        let s = snap(horns, 10.0, 0.0);
        assert_eq!(classify_default(Handedness::Right, &s), None);
        // Hand twisted too far sideways.
        let s = snap(horns, -45.0, 40.0);
        assert_eq!(classify_default(Handedness::Right, &s), None);
    }

    #[test]
    fn test_raised_fist_is_halt() {
        let s = snap([0.6; 5], -30.0, 0.0);
        assert_eq!(classify_default(Handedness::Left, &s), Some(Gesture::Halt));
    }

    #[test]
    fn test_loose_fist_below_sum_is_nothing() {
        // Thumb, index and middle pass but the summed flexion does not.
        let s = snap([0.3, 0.3, 0.3, 0.3, 0.3], -30.0, 0.0);
        assert_eq!(classify_default(Handedness::Left, &s), None);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let s = snap([0.05, 0.1, 0.1, 0.5, 0.5], 0.0, 0.0);
        let first = classify_default(Handedness::Left, &s);
        for _ in 0..10 {
            assert_eq!(classify_default(Handedness::Left, &s), first);
        }
    }

    #[test]
    fn test_snapshot_rounding_lands_on_thresholds() {
        // Raw sensor jitter a hair above the threshold rounds back onto it.
        let s = snap([0.000_04, 0.243_02, 0.243_04, 0.243_01, 0.242_96], 0.0, 60.0);
        assert_eq!(
            classify_default(Handedness::Left, &s),
            Some(Gesture::ThumbsUp)
        );
    }

    #[test]
    fn test_gesture_labels() {
        assert_eq!(Gesture::ThumbsUp.to_string(), "THUMBS_UP");
        assert_eq!(Gesture::GoBulls.to_string(), "GO_BULLS");
        assert_eq!(Gesture::Land.to_string(), "LAND");
    }
}

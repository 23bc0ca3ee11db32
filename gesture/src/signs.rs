//! The reference sign vocabulary.
//!
//! Sixty static handshapes grouped by theme. Each predicate is a crude
//! single-frame heuristic over one hand; several overlap, and the order of
//! [`Vocabulary::reference`] decides which label wins.
//!
//! The themed handshapes come first. The six classic greeting detectors
//! accept far more hands than any of them, so they close the list, in their
//! established order. That order keeps `no` behind `yes`: every hand `no`
//! accepts has three folded fingers, so `yes` always claims it first.

use crate::hand::Hand;
use crate::landmark::{Finger, INDEX_MCP, INDEX_PIP, MIDDLE_PIP, RING_MCP, THUMB_TIP};
use crate::vocabulary::{Category, Difficulty, SignEntry, SignLabel, Vocabulary};

use Category::*;
use Difficulty::*;
use Finger::{Index, Middle, Pinky, Ring, Thumb};

const fn entry(
    label: &'static str,
    word: &'static str,
    category: Category,
    difficulty: Difficulty,
    description: &'static str,
    hindi: &'static str,
) -> SignEntry {
    SignEntry {
        label: SignLabel::new(label),
        word,
        category,
        difficulty,
        description,
        hindi,
    }
}

type Rule = (SignEntry, fn(&Hand<'_>) -> bool);

impl Vocabulary {
    /// Builds the reference vocabulary in evaluation order.
    pub fn reference() -> Vocabulary {
        RULES
            .iter()
            .fold(Vocabulary::builder(), |b, (entry, predicate)| {
                b.rule(*entry, *predicate)
            })
            .build()
            .expect("reference vocabulary labels are unique")
    }
}

#[rustfmt::skip]
static RULES: &[Rule] = &[
    // Greetings
    (entry("good_morning", "Good morning", Greetings, Beginner, "Make \"G\" sign, then \"M\" sign with both hands", "सुप्रभात"), good_morning),
    (entry("good_night", "Good night", Greetings, Beginner, "Make \"G\" sign, then \"N\" sign with both hands", "शुभ रात्रि"), good_night),
    (entry("goodbye", "Goodbye", Greetings, Beginner, "Open hand waved beside the body", "अलविदा"), goodbye),
    (entry("welcome", "Welcome", Greetings, Beginner, "Flat hand sweeps in toward the chest", "स्वागत है"), welcome),
    // Basic needs
    (entry("water", "Water", Needs, Beginner, "Make W sign and touch it to your mouth", "पानी"), water),
    (entry("bathroom", "Bathroom", Needs, Beginner, "Make \"T\" sign and tap twice", "शौचालय"), bathroom),
    (entry("medicine", "Medicine", Needs, Intermediate, "Make \"M\" sign and tap on opposite wrist", "दवा"), medicine),
    (entry("sleep", "Sleep", Needs, Beginner, "Place both hands together under tilted head", "सोना"), sleep),
    (entry("eat", "Eat", Needs, Beginner, "Pinched fingers brought to the mouth", "खाओ"), eat),
    (entry("food", "Food", Needs, Beginner, "Touch fingertips to mouth repeatedly", "खाना"), food),
    (entry("drink", "Drink", Needs, Beginner, "Curved hand tipped toward the mouth like a cup", "पियो"), drink),
    (entry("home", "Home", Needs, Intermediate, "Pinched fingertips touched to the cheek", "घर"), home),
    // Emergency
    (entry("help", "Help", Emergency, Intermediate, "Place one hand on top of the other, lift both up", "मदद"), help),
    (entry("emergency", "Emergency", Emergency, Intermediate, "Wave both hands frantically above head", "आपातकाल"), emergency),
    (entry("police", "Police", Emergency, Intermediate, "Make \"P\" sign and tap on shoulder", "पुलिस"), police),
    (entry("doctor", "Doctor", Emergency, Intermediate, "Make \"D\" sign and tap on chest", "डॉक्टर"), doctor),
    (entry("hospital", "Hospital", Emergency, Intermediate, "Make \"H\" sign and draw a cross on the shoulder", "अस्पताल"), hospital),
    (entry("pain", "Pain", Emergency, Intermediate, "Index fingers point at each other and twist", "दर्द"), pain),
    (entry("fire", "Fire", Emergency, Intermediate, "Spread fingers flicker upward from low", "आग"), fire),
    // People
    (entry("family", "Family", People, Intermediate, "Make F sign and move in circle motion", "परिवार"), family),
    (entry("friend", "Friend", People, Intermediate, "Make peace sign and tap twice", "दोस्त"), friend),
    (entry("mother", "Mother", People, Intermediate, "Make \"M\" sign and tap on chin", "माँ"), mother),
    (entry("father", "Father", People, Intermediate, "Make \"F\" sign and tap on forehead", "पिता"), father),
    (entry("brother", "Brother", People, Intermediate, "L shape brought down from the forehead", "भाई"), brother),
    (entry("sister", "Sister", People, Intermediate, "L shape brought down from the chin", "बहन"), sister),
    // Emotions
    (entry("love", "Love", Emotions, Advanced, "Cross arms over chest with hands on shoulders", "प्यार"), love),
    (entry("happy", "Happy", Emotions, Intermediate, "Make \"H\" sign and move up and down", "खुश"), happy),
    (entry("sad", "Sad", Emotions, Intermediate, "Make \"S\" sign and move down", "उदास"), sad),
    (entry("angry", "Angry", Emotions, Advanced, "Make \"A\" sign and shake hand", "गुस्सा"), angry),
    (entry("scared", "Scared", Emotions, Intermediate, "Open hands pulled in sharply to the chest", "डरा हुआ"), scared),
    (entry("tired", "Tired", Emotions, Intermediate, "Bent hand droops against the chest", "थका हुआ"), tired),
    // Numbers
    (entry("one", "One", Numbers, Beginner, "Hold up one finger", "एक"), one),
    (entry("two", "Two", Numbers, Beginner, "Hold up two fingers", "दो"), two),
    (entry("three", "Three", Numbers, Beginner, "Hold up three fingers", "तीन"), three),
    (entry("four", "Four", Numbers, Beginner, "Hold up four fingers, thumb folded", "चार"), four),
    (entry("five", "Five", Numbers, Beginner, "Hold up all five fingers", "पाँच"), five),
    (entry("six", "Six", Numbers, Beginner, "Thumb touches the little finger", "छह"), six),
    (entry("seven", "Seven", Numbers, Beginner, "Thumb touches the ring finger", "सात"), seven),
    (entry("eight", "Eight", Numbers, Beginner, "Thumb touches the middle finger", "आठ"), eight),
    (entry("nine", "Nine", Numbers, Beginner, "Thumb touches the index finger", "नौ"), nine),
    (entry("ten", "Ten", Numbers, Beginner, "Thumb up from a closed fist", "दस"), ten),
    // Colors
    (entry("red", "Red", Colors, Beginner, "Make \"R\" sign and tap on lips", "लाल"), red),
    (entry("blue", "Blue", Colors, Beginner, "Make \"B\" sign and tap on lips", "नीला"), blue),
    (entry("green", "Green", Colors, Beginner, "Make \"G\" sign and tap on lips", "हरा"), green),
    (entry("yellow", "Yellow", Colors, Beginner, "Make \"Y\" sign and twist", "पीला"), yellow),
    (entry("black", "Black", Colors, Beginner, "Index finger drawn across the forehead", "काला"), black),
    (entry("white", "White", Colors, Beginner, "Open hand pulled away from the chest", "सफ़ेद"), white),
    // Common words
    (entry("more", "More", Common, Beginner, "Pinched fingertips tapped together", "और"), more),
    (entry("stop", "Stop", Common, Beginner, "Flat hand chops down sideways", "रुको"), stop),
    (entry("good", "Good", Common, Beginner, "Flat hand from the chin, palm in", "अच्छा"), good),
    (entry("bad", "Bad", Common, Beginner, "Flat hand from the chin, flipped palm out", "बुरा"), bad),
    (entry("okay", "Okay", Common, Beginner, "Thumb and index form a ring, other fingers fanned", "ठीक है"), okay),
    (entry("name", "Name", Common, Beginner, "H fingers held sideways and tapped", "नाम"), name),
    (entry("where", "Where", Common, Beginner, "Raised index finger wags side to side", "कहाँ"), where_),
    // Catch-all greeting detectors
    (entry("hello", "Hello", Greetings, Beginner, "Wave your hand with open palm facing forward", "नमस्ते"), hello),
    (entry("thank_you", "Thank you", Greetings, Beginner, "Touch chin with fingertips, then move hand forward", "धन्यवाद"), thank_you),
    (entry("yes", "Yes", Greetings, Beginner, "Closed fist nodding up and down", "हाँ"), yes),
    (entry("no", "No", Greetings, Beginner, "Index finger raised, wagging side to side", "नहीं"), no),
    (entry("please", "Please", Greetings, Beginner, "Make circular motion on chest with flat hand", "कृपया"), please),
    (entry("sorry", "Sorry", Greetings, Beginner, "Make circular motion on chest with closed fist", "माफ़ कीजिए"), sorry),
];

// ----------------------------------------------------------------------------
// Greetings
// ----------------------------------------------------------------------------

/// At least four of five digits pointing up.
fn hello(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::ALL) >= 4
}

fn thank_you(h: &Hand<'_>) -> bool {
    h.is_extended(Index) && h.is_extended(Middle) && h.is_extended(Thumb)
}

/// At least three of four fingers folded.
fn yes(h: &Hand<'_>) -> bool {
    h.count_folded(&Finger::FOUR) >= 3
}

fn no(h: &Hand<'_>) -> bool {
    h.is_extended(Index) && h.is_folded(Middle) && h.is_folded(Ring) && h.is_folded(Pinky)
}

fn please(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::FOUR) >= 3
}

fn sorry(h: &Hand<'_>) -> bool {
    h.at_chest()
}

/// "G": index pointing sideways, thumb out, rest folded.
fn g_shape(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.pointing_sideways(Index) && h.thumb_out()
}

fn good_morning(h: &Hand<'_>) -> bool {
    g_shape(h) && h.upper_half() && !h.near_face()
}

fn good_night(h: &Hand<'_>) -> bool {
    g_shape(h) && !h.upper_half()
}

fn goodbye(h: &Hand<'_>) -> bool {
    h.flat() && h.off_center()
}

fn welcome(h: &Hand<'_>) -> bool {
    h.flat() && h.pointing_sideways(Middle) && h.at_chest()
}

// ----------------------------------------------------------------------------
// Needs
// ----------------------------------------------------------------------------

fn water(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle, Ring]) && h.near_face()
}

/// Thumb pinched against index and middle tips, ring finger down.
fn flat_o(h: &Hand<'_>) -> bool {
    h.tips_touch(Thumb, Index) && h.tips_touch(Thumb, Middle) && !h.is_extended(Ring)
}

fn food(h: &Hand<'_>) -> bool {
    flat_o(h) && h.near_face() && !h.off_center()
}

/// "T": fist with the thumb tip pushed up between index and middle.
fn bathroom(h: &Hand<'_>) -> bool {
    h.shape(&[]) && h.touching(THUMB_TIP, INDEX_PIP) && !flat_o(h)
}

/// "M": fist with the thumb tucked under to the ring knuckle.
fn medicine(h: &Hand<'_>) -> bool {
    h.shape(&[]) && h.touching(THUMB_TIP, RING_MCP) && !flat_o(h) && !h.near_face()
}

fn sleep(h: &Hand<'_>) -> bool {
    h.flat() && h.pointing_sideways(Middle) && h.near_face()
}

fn eat(h: &Hand<'_>) -> bool {
    h.tips_touch(Thumb, Index) && h.shape(&[]) && h.near_face()
}

/// "C": curved fingers, thumb opposite.
fn drink(h: &Hand<'_>) -> bool {
    h.thumb_out() && Finger::FOUR.iter().all(|f| h.is_curled(*f)) && h.near_face()
}

fn home(h: &Hand<'_>) -> bool {
    flat_o(h) && h.tips_touch(Thumb, Ring) && h.off_center() && h.upper_half()
}

// ----------------------------------------------------------------------------
// Emergency
// ----------------------------------------------------------------------------

fn help(h: &Hand<'_>) -> bool {
    h.thumb_up() && h.shape(&[]) && h.at_chest()
}

fn emergency(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::ALL) == 5 && h.spread() && h.above_head()
}

/// "P": index and middle out, thumb resting on the middle finger.
fn police(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && h.touching(THUMB_TIP, MIDDLE_PIP)
}

/// "D": index up, thumb meeting the middle fingertip.
fn doctor(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.thumb_meets(Middle) && h.at_chest()
}

fn hospital(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle])
        && h.fingers_together(Index, Middle)
        && h.pointing_sideways(Index)
        && h.off_center()
        && h.upper_half()
}

fn pain(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.pointing_sideways(Index) && !h.thumb_out() && h.at_chest()
}

fn fire(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::FOUR) == 4 && h.spread() && h.low()
}

// ----------------------------------------------------------------------------
// People
// ----------------------------------------------------------------------------

/// "F": thumb and index ring, other three fingers up.
fn f_shape(h: &Hand<'_>) -> bool {
    h.thumb_meets(Index) && h.count_extended(&[Middle, Ring, Pinky]) == 3
}

fn family(h: &Hand<'_>) -> bool {
    f_shape(h) && h.at_chest()
}

/// Peace sign held up by the face.
fn friend(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && !h.fingers_together(Index, Middle) && h.near_face()
}

fn mother(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::ALL) == 5 && h.spread() && h.near_face() && !h.palm_facing_camera()
}

fn father(h: &Hand<'_>) -> bool {
    f_shape(h) && h.landmark(INDEX_MCP).y < 0.15
}

/// "L": index up, thumb out.
fn l_shape(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.thumb_out() && !h.pointing_sideways(Index)
}

fn brother(h: &Hand<'_>) -> bool {
    l_shape(h) && h.near_face()
}

fn sister(h: &Hand<'_>) -> bool {
    l_shape(h) && !h.near_face() && h.upper_half()
}

// ----------------------------------------------------------------------------
// Emotions
// ----------------------------------------------------------------------------

/// Thumb, index and pinky out: the I-love-you handshape.
fn love(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Pinky]) && h.thumb_out()
}

fn happy(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && h.fingers_together(Index, Middle) && h.at_chest()
}

fn sad(h: &Hand<'_>) -> bool {
    h.shape(&[]) && h.is_folded(Thumb) && h.near_face()
}

/// "A": fist with the thumb raised alongside.
fn angry(h: &Hand<'_>) -> bool {
    h.shape(&[]) && h.is_extended(Thumb) && !h.thumb_out() && h.near_face()
}

fn scared(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::ALL) == 5 && h.spread() && h.at_chest() && h.palm_facing_camera()
}

fn tired(h: &Hand<'_>) -> bool {
    Finger::FOUR.iter().all(|f| h.pointing_down(*f)) && h.at_chest()
}

// ----------------------------------------------------------------------------
// Numbers
// ----------------------------------------------------------------------------

fn one(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.is_folded(Thumb)
}

fn two(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && !h.fingers_together(Index, Middle) && h.is_folded(Thumb)
}

fn three(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && h.thumb_out()
}

fn four(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::FOUR) == 4 && h.is_folded(Thumb) && !h.near_face()
}

fn five(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::ALL) == 5 && h.spread() && h.thumb_out()
}

fn six(h: &Hand<'_>) -> bool {
    h.thumb_meets(Pinky) && h.count_extended(&[Index, Middle, Ring]) == 3
}

fn seven(h: &Hand<'_>) -> bool {
    h.thumb_meets(Ring) && h.count_extended(&[Index, Middle, Pinky]) == 3
}

fn eight(h: &Hand<'_>) -> bool {
    h.thumb_meets(Middle) && h.count_extended(&[Index, Ring, Pinky]) == 3
}

fn nine(h: &Hand<'_>) -> bool {
    f_shape(h) && !h.spread()
}

fn ten(h: &Hand<'_>) -> bool {
    h.thumb_up() && h.shape(&[])
}

// ----------------------------------------------------------------------------
// Colors
// ----------------------------------------------------------------------------

/// "R": index and middle crossed, tips nearly on top of each other.
fn red(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && h.tips_touch(Index, Middle) && h.near_face()
}

fn blue(h: &Hand<'_>) -> bool {
    h.flat() && h.is_folded(Thumb) && h.near_face()
}

fn green(h: &Hand<'_>) -> bool {
    g_shape(h) && h.near_face()
}

/// "Y": thumb and pinky out.
fn yellow(h: &Hand<'_>) -> bool {
    h.shape(&[Pinky]) && h.thumb_out()
}

fn black(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.pointing_sideways(Index) && h.landmark(INDEX_MCP).y < 0.2
}

fn white(h: &Hand<'_>) -> bool {
    h.count_extended(&Finger::ALL) == 5 && h.at_chest() && !h.palm_facing_camera()
}

// ----------------------------------------------------------------------------
// Common words
// ----------------------------------------------------------------------------

fn more(h: &Hand<'_>) -> bool {
    flat_o(h) && h.at_chest()
}

fn stop(h: &Hand<'_>) -> bool {
    h.flat() && h.pointing_sideways(Middle)
}

fn good(h: &Hand<'_>) -> bool {
    h.flat() && h.near_face() && h.palm_facing_camera()
}

fn bad(h: &Hand<'_>) -> bool {
    h.flat() && h.near_face() && !h.palm_facing_camera()
}

fn okay(h: &Hand<'_>) -> bool {
    f_shape(h) && h.spread()
}

fn name(h: &Hand<'_>) -> bool {
    h.shape(&[Index, Middle]) && h.fingers_together(Index, Middle) && h.pointing_sideways(Middle)
}

fn where_(h: &Hand<'_>) -> bool {
    h.shape(&[Index]) && h.above_head()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{HandFrame, Handedness};
    use crate::pose::{FingerPose, PoseBuilder, ThumbPose};

    fn first_match(frame: &HandFrame) -> Option<&'static str> {
        let hand = Hand::new(frame).unwrap();
        RULES
            .iter()
            .find(|(_, p)| p(&hand))
            .map(|(e, _)| e.label.as_str())
    }

    fn matches(label: &str, frame: &HandFrame) -> bool {
        let hand = Hand::new(frame).unwrap();
        RULES
            .iter()
            .find(|(e, _)| e.label.as_str() == label)
            .map(|(_, p)| p(&hand))
            .unwrap()
    }

    #[test]
    fn reference_vocabulary_shape() {
        let vocab = Vocabulary::reference();
        assert_eq!(vocab.len(), 60);
        let last: Vec<&str> = vocab.labels().skip(54).map(|l| l.as_str()).collect();
        assert_eq!(
            last,
            vec!["hello", "thank_you", "yes", "no", "please", "sorry"]
        );
        assert_eq!(vocab.by_category(Category::Numbers).count(), 10);
        assert_eq!(vocab.by_category(Category::Emergency).count(), 7);
    }

    #[test]
    fn every_entry_has_display_text() {
        for (e, _) in RULES {
            assert!(!e.word.is_empty(), "{} has no word", e.label);
            assert!(!e.hindi.is_empty(), "{} has no hindi gloss", e.label);
            assert!(!e.description.is_empty(), "{} has no description", e.label);
        }
    }

    #[test]
    fn open_palm_is_hello() {
        assert_eq!(first_match(&PoseBuilder::open().build()), Some("hello"));
    }

    #[test]
    fn open_palm_also_matches_later_rules() {
        // Overlap resolved by order: thank_you and please both hold too.
        let frame = PoseBuilder::open().build();
        assert!(matches("thank_you", &frame));
        assert!(matches("please", &frame));
    }

    #[test]
    fn fist_is_yes() {
        assert_eq!(first_match(&PoseBuilder::fist().build()), Some("yes"));
    }

    #[test]
    fn pointing_index_is_one() {
        let frame = PoseBuilder::fist().extend(Finger::Index).build();
        assert_eq!(first_match(&frame), Some("one"));
        assert!(matches("yes", &frame));
        assert!(matches("no", &frame));
    }

    #[test]
    fn two_fingers_with_thumb_out_is_three() {
        let frame = PoseBuilder::fist()
            .extend(Finger::Index)
            .extend(Finger::Middle)
            .thumb(ThumbPose::Out)
            .build();
        assert_eq!(first_match(&frame), Some("three"));
        assert!(matches("thank_you", &frame));
    }

    #[test]
    fn two_fingers_together_at_chest_is_happy() {
        let frame = PoseBuilder::fist()
            .extend(Finger::Index)
            .extend(Finger::Middle)
            .at(0.5, 0.6)
            .build();
        assert_eq!(first_match(&frame), Some("happy"));
        assert!(matches("sorry", &frame));
    }

    #[test]
    fn index_and_pinky_with_thumb_is_love() {
        let frame = PoseBuilder::fist()
            .extend(Finger::Index)
            .extend(Finger::Pinky)
            .thumb(ThumbPose::Out)
            .build();
        assert_eq!(first_match(&frame), Some("love"));
    }

    #[test]
    fn spread_two_fingers_is_two() {
        let frame = PoseBuilder::fist()
            .extend(Finger::Index)
            .extend(Finger::Middle)
            .spread(true)
            .build();
        assert_eq!(first_match(&frame), Some("two"));
    }

    #[test]
    fn sideways_h_off_center_high_is_hospital() {
        let frame = PoseBuilder::fist()
            .finger(Finger::Index, FingerPose::Sideways)
            .finger(Finger::Middle, FingerPose::Sideways)
            .at(0.15, 0.45)
            .build();
        assert_eq!(first_match(&frame), Some("hospital"));
        assert!(matches("name", &frame));
    }

    #[test]
    fn nine_and_okay_split_on_spread() {
        let nine = PoseBuilder::open()
            .spread(false)
            .touch_thumb_to(Finger::Index)
            .at(0.5, 0.9)
            .build();
        let okay = PoseBuilder::open().touch_thumb_to(Finger::Index).build();
        assert_eq!(first_match(&nine), Some("nine"));
        assert_eq!(first_match(&okay), Some("okay"));
        assert!(!matches("okay", &nine));
        assert!(!matches("nine", &okay));
    }

    #[test]
    fn thumb_on_one_tip_picks_one_number() {
        let at = |f| {
            PoseBuilder::open()
                .spread(false)
                .touch_thumb_to(f)
                .at(0.5, 0.9)
                .build()
        };
        assert_eq!(first_match(&at(Finger::Pinky)), Some("six"));
        assert_eq!(first_match(&at(Finger::Ring)), Some("seven"));
        assert_eq!(first_match(&at(Finger::Middle)), Some("eight"));
        assert!(!matches("six", &at(Finger::Ring)));
    }

    #[test]
    fn raised_fingers_at_the_face() {
        let g = PoseBuilder::fist()
            .finger(Finger::Index, FingerPose::Sideways)
            .thumb(ThumbPose::Out);
        assert_eq!(first_match(&g.clone().at(0.2, 0.3).build()), Some("green"));
        assert_eq!(first_match(&g.clone().at(0.2, 0.45).build()), Some("good_morning"));
        assert_eq!(first_match(&g.at(0.2, 0.7).build()), Some("good_night"));

        let raised = PoseBuilder::open().at(0.5, 0.25).build();
        assert_eq!(first_match(&raised), Some("emergency"));
        let mother = PoseBuilder::open().at(0.5, 0.34).palm_away().build();
        assert_eq!(first_match(&mother), Some("mother"));
        assert!(!matches("scared", &mother));
    }

    #[test]
    fn fist_at_chest_with_thumb_up_is_help() {
        let frame = PoseBuilder::fist().thumb(ThumbPose::Up).at(0.5, 0.6).build();
        assert_eq!(first_match(&frame), Some("help"));
        assert!(matches("ten", &frame));
    }

    #[test]
    fn left_hand_palm_away_matches_bad() {
        let frame = PoseBuilder::open()
            .spread(false)
            .thumb(ThumbPose::Tucked)
            .handedness(Handedness::Left)
            .palm_away()
            .at(0.5, 0.3)
            .build();
        assert!(matches("bad", &frame));
        assert!(!matches("good", &frame));
    }
}

// Host-side tests for landmark parsing and gesture classification.

use craft_core::error::CraftError;
use craft_core::gesture::flags_for;
use craft_core::*;
use glam::Vec2;

fn viewport() -> Viewport {
    Viewport::new(640.0, 480.0).unwrap()
}

/// Normalized landmarks whose mirrored index tip lands on `tip`, with the
/// thumb `d_index` to the right and the middle tip `d_middle` below the thumb.
fn hand_at(tip: Vec2, d_index: f32, d_middle: f32) -> HandLandmarks {
    let vp = viewport();
    let thumb = tip + Vec2::new(d_index, 0.0);
    let middle = thumb + Vec2::new(0.0, d_middle);
    let mut screen = [tip; LANDMARKS_PER_HAND];
    screen[THUMB_TIP] = thumb;
    screen[MIDDLE_TIP] = middle;
    let normalized: Vec<Vec2> = screen
        .iter()
        .map(|p| Vec2::new(1.0 - p.x / vp.width, p.y / vp.height))
        .collect();
    HandLandmarks::new(&normalized).unwrap()
}

#[test]
fn thresholds_are_inclusive() {
    let t = Tuning::default();
    assert!(flags_for(55.0, 200.0, &t).pinch);
    assert!(!flags_for(55.5, 200.0, &t).pinch);
    assert!(flags_for(90.0, 200.0, &t).release);
    assert!(!flags_for(89.5, 200.0, &t).release);

    let between = flags_for(70.0, 10.0, &t);
    assert!(!between.pinch && !between.closed && !between.release);
}

#[test]
fn closed_requires_pinch_and_middle_finger() {
    let t = Tuning::default();
    assert!(flags_for(50.0, 65.0, &t).closed);
    assert!(!flags_for(50.0, 66.0, &t).closed);
    // middle finger curled but thumb and index apart
    assert!(!flags_for(60.0, 10.0, &t).closed);
}

#[test]
fn pinch_hysteresis_sweep() {
    // A holder that engages on pinch and only lets go on release, the way
    // the ghost and drag stages consume the flags.
    let t = Tuning::default();
    let mut held = false;
    let mut changes = Vec::new();
    let up = (40..=100).map(|d| d as f32);
    let down = (40..=100).rev().map(|d| d as f32);
    for d in up.chain(down) {
        let f = flags_for(d, 200.0, &t);
        let next = if held { !f.release } else { f.pinch };
        if next != held {
            changes.push((d, next));
            held = next;
        }
    }
    assert_eq!(changes, vec![(40.0, true), (90.0, false), (55.0, true)]);
}

#[test]
fn classify_reads_the_mirrored_index_tip() {
    let t = Tuning::default();
    let tip = Vec2::new(320.0, 200.0);
    let screen = hand_at(tip, 30.0, 40.0).to_screen(viewport());
    let p = classify(HandId(3), &screen, &t);
    assert_eq!(p.hand, HandId(3));
    assert!(p.pos.distance(tip) < 1e-3);
    assert!(p.pinch && p.closed && !p.release);

    let open = hand_at(tip, 120.0, 140.0).to_screen(viewport());
    let p = classify(HandId(3), &open, &t);
    assert!(!p.pinch && !p.closed && p.release);
}

#[test]
fn to_screen_mirrors_x() {
    let mut pts = [Vec2::new(0.25, 0.5); LANDMARKS_PER_HAND];
    pts[WRIST] = Vec2::new(1.0, 0.0);
    let screen = HandLandmarks::new(&pts).unwrap().to_screen(viewport());
    assert_eq!(screen.points[INDEX_TIP], Vec2::new(480.0, 240.0));
    assert_eq!(screen.points[WRIST], Vec2::new(0.0, 0.0));
}

#[test]
fn malformed_landmarks_are_rejected() {
    let short = vec![Vec2::ZERO; 20];
    assert_eq!(HandLandmarks::new(&short), Err(CraftError::LandmarkCount(20)));

    let mut bad = vec![Vec2::ZERO; LANDMARKS_PER_HAND];
    bad[7] = Vec2::new(f32::NAN, 0.0);
    assert_eq!(HandLandmarks::new(&bad), Err(CraftError::NonFinite { index: 7 }));
}

#[test]
fn flat_buffers_split_into_hands() {
    let stride = LANDMARKS_PER_HAND * 2;
    let buf = vec![0.5f32; stride * 2];
    let hands = hands_from_flat(&buf).unwrap();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[1].point(INDEX_TIP), Vec2::new(0.5, 0.5));

    assert!(hands_from_flat(&[]).unwrap().is_empty());
    assert_eq!(
        hands_from_flat(&vec![0.0; stride + 1]),
        Err(CraftError::RaggedBuffer(stride + 1))
    );
}

#[test]
fn viewport_must_have_area() {
    assert!(Viewport::new(0.0, 480.0).is_err());
    assert!(Viewport::new(640.0, f32::NAN).is_err());
    assert!(Viewport::new(1.0, 1.0).is_ok());
}

#[test]
fn hand_ids_display_stably() {
    assert_eq!(HandId(2).to_string(), "hand#2");
}

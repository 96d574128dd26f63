// Interaction tuning constants shared by the web and native front-ends.
// All distances are in device pixels of the (mirrored) video frame.

// Landmark layout (MediaPipe hand model)
pub const LANDMARKS_PER_HAND: usize = 21;
pub const MAX_HANDS: usize = 2;
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;

// Gesture thresholds; the 55..90 gap is the pinch/release hysteresis band
pub const PINCH_ON_DIST: f32 = 55.0; // thumb-index distance that counts as a pinch
pub const CLOSED_MIDDLE_DIST: f32 = 65.0; // thumb-middle distance required for a closed grab
pub const RELEASE_DIST: f32 = 90.0; // thumb-index distance that ends a pinch/grab

// Detection cadence (~30 Hz)
pub const DETECT_INTERVAL_MS: f64 = 33.0;

// Palette strip
pub const MENU_WIDTH: f32 = 160.0;
pub const MENU_TOP: f32 = 60.0; // centre of the first entry at zero offset
pub const MENU_SPACING: f32 = 70.0;
pub const MENU_ENTRY_RADIUS: f32 = 26.0;
pub const MENU_HIT_TOLERANCE: f32 = 28.0; // vertical pick tolerance around an entry centre
pub const MENU_SCROLL_MARGIN: f32 = 20.0; // overscroll allowed past the first entry
pub const MENU_BOTTOM_MARGIN: f32 = 60.0; // space kept below the last entry

// Ghost / spawn
pub const GHOST_RADIUS: f32 = 30.0;
pub const GHOST_PLACE_MARGIN: f32 = 20.0; // release must clear the strip by this much
pub const SPAWN_RADIUS: f32 = 34.0;
pub const SPAWN_EDGE_INSET: f32 = 40.0;

// Drag sessions
pub const GRAB_REACH: f32 = 24.0; // added to the item radius when grabbing
pub const DRAG_EASE: f32 = 0.45; // fraction of the remaining gap closed per processed frame

// Merging
pub const MERGE_OVERLAP: f32 = 6.0; // centres must be this much closer than r_a + r_b
pub const MERGE_RADIUS: f32 = 36.0;
pub const MERGE_GRACE_MS: f64 = 350.0;

// Hand tracking
pub const HAND_MATCH_DIST: f32 = 220.0; // max fingertip jump still treated as the same hand
pub const HAND_LOST_AFTER: u32 = 5; // processed detections a hand may be missing for

pub const BASE_ITEMS: [&str; 4] = ["Fire", "Water", "Earth", "Air"];

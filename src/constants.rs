// DOM hooks and detector assets used by the web front-end.

pub const CANVAS_ID: &str = "craft-canvas";
pub const STATUS_OVERLAY_ID: &str = "status-overlay";

// MediaPipe tasks-vision runtime and hand model
pub const WASM_FILESET_URL: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@0.10.0/wasm";
pub const MODEL_ASSET_PATH: &str = "/models/hand_landmarker.task";
pub const DETECTOR_NUM_HANDS: u32 = 2;

// Camera request
pub const FACING_MODE: &str = "user";

// URL fragment that switches to the skeleton-only viewer
pub const SKELETON_FRAGMENT: &str = "#skeleton";

pub const LOADING_MESSAGE: &str = "Loading hand tracker...";

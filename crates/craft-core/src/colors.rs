// Fill colours per item type and the fixed overlay palette.

#[inline]
pub fn item_color(kind: &str) -> Option<&'static str> {
    match kind {
        "Fire" => Some("#ff7043"),
        "Water" => Some("#4fc3f7"),
        "Earth" => Some("#8d6e63"),
        "Air" => Some("#eeeeee"),
        "Steam" => Some("#cfd8dc"),
        "Lava" => Some("#ff3b30"),
        "Mud" => Some("#6d4c41"),
        "Cloud" => Some("#ffffff"),
        "Stone" => Some("#9e9e9e"),
        "Metal" => Some("#b0bec5"),
        "Sand" => Some("#f4d03f"),
        "Glass" => Some("#aed6f1"),
        _ => None,
    }
}

pub const DIM_OVERLAY: &str = "rgba(0,0,0,0.4)";
pub const MENU_BACKGROUND: &str = "rgba(20,20,28,0.9)";
pub const LABEL_TEXT: &str = "#111";
pub const HAND_OPEN: &str = "#00bcd4";
pub const HAND_CLOSED: &str = "#00ff9c";
pub const DRAG_RING: &str = "#00ffc8";

// Skeleton viewer: one colour per hand slot, plus a translucent glow
pub const SKELETON_HANDS: [&str; 2] = ["#00FF88", "#33A1FF"];
pub const SKELETON_GLOWS: [&str; 2] = ["#00FF8855", "#33A1FF55"];

//! Runtime tuning and frame geometry.
//!
//! `Tuning` carries every threshold the interaction engine uses so a
//! front-end can adjust feel without touching the stages themselves. Its
//! `Default` is built from the constants in [`crate::constants`].

use crate::constants::*;
use crate::error::{CraftError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub pinch_on_dist: f32,
    pub closed_middle_dist: f32,
    pub release_dist: f32,
    pub detect_interval_ms: f64,

    pub menu_width: f32,
    pub menu_top: f32,
    pub menu_spacing: f32,
    pub menu_entry_radius: f32,
    pub menu_hit_tolerance: f32,
    pub menu_scroll_margin: f32,
    pub menu_bottom_margin: f32,

    pub ghost_radius: f32,
    pub ghost_place_margin: f32,
    pub spawn_radius: f32,
    pub spawn_edge_inset: f32,

    pub grab_reach: f32,
    pub drag_ease: f32,

    pub merge_overlap: f32,
    pub merge_radius: f32,
    pub merge_grace_ms: f64,

    pub hand_match_dist: f32,
    pub hand_lost_after: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pinch_on_dist: PINCH_ON_DIST,
            closed_middle_dist: CLOSED_MIDDLE_DIST,
            release_dist: RELEASE_DIST,
            detect_interval_ms: DETECT_INTERVAL_MS,
            menu_width: MENU_WIDTH,
            menu_top: MENU_TOP,
            menu_spacing: MENU_SPACING,
            menu_entry_radius: MENU_ENTRY_RADIUS,
            menu_hit_tolerance: MENU_HIT_TOLERANCE,
            menu_scroll_margin: MENU_SCROLL_MARGIN,
            menu_bottom_margin: MENU_BOTTOM_MARGIN,
            ghost_radius: GHOST_RADIUS,
            ghost_place_margin: GHOST_PLACE_MARGIN,
            spawn_radius: SPAWN_RADIUS,
            spawn_edge_inset: SPAWN_EDGE_INSET,
            grab_reach: GRAB_REACH,
            drag_ease: DRAG_EASE,
            merge_overlap: MERGE_OVERLAP,
            merge_radius: MERGE_RADIUS,
            merge_grace_ms: MERGE_GRACE_MS,
            hand_match_dist: HAND_MATCH_DIST,
            hand_lost_after: HAND_LOST_AFTER,
        }
    }
}

/// Pixel size of the mirrored video frame everything is laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(CraftError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

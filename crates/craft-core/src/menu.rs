//! Palette strip on the left edge: layout, scroll clamping and hit-testing.
//!
//! Scrolling itself is driven per hand by the [`crate::hands::HandMode`]
//! machine in [`crate::world`]; this module only owns the shared offset and
//! the geometry every stage agrees on.

use glam::Vec2;

use crate::discovery::Discovered;
use crate::geometry::clamp;
use crate::tuning::Tuning;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuScrollState {
    pub offset: f32,
    /// Some hand is currently drag-scrolling the strip.
    pub active: bool,
}

impl MenuScrollState {
    /// Apply one scroll step from a hand whose previous baseline was `from_y`.
    /// Each hand keeps its own baseline in `HandMode::Scrolling`.
    pub fn drag(&mut self, from_y: f32, to_y: f32) {
        self.offset += to_y - from_y;
    }

    /// Keep the list from scrolling past either end.
    ///
    /// The offset stays within `[lower, menu_scroll_margin]`, where `lower`
    /// lets the last entry reach `menu_bottom_margin` above the viewport
    /// bottom. When the list is so short that `lower` exceeds the margin the
    /// range is empty; the list then rests between its natural position and
    /// the margin, `[0, menu_scroll_margin]`, instead of being pushed down.
    pub fn clamp(&mut self, entries: usize, viewport_height: f32, tuning: &Tuning) {
        let (lower, upper) = scroll_bounds(entries, viewport_height, tuning);
        self.offset = clamp(self.offset, lower, upper);
    }
}

/// Offset range `(lower, upper)` for a list of `entries` in a strip of the
/// given height.
pub fn scroll_bounds(entries: usize, viewport_height: f32, tuning: &Tuning) -> (f32, f32) {
    let upper = tuning.menu_scroll_margin;
    let lower = -(entries as f32) * tuning.menu_spacing + viewport_height
        - tuning.menu_bottom_margin;
    if lower <= upper {
        (lower, upper)
    } else {
        (0.0, upper)
    }
}

#[inline]
pub fn in_strip(pos: Vec2, tuning: &Tuning) -> bool {
    pos.x <= tuning.menu_width
}

#[inline]
pub fn entry_center_y(index: usize, offset: f32, tuning: &Tuning) -> f32 {
    tuning.menu_top + index as f32 * tuning.menu_spacing + offset
}

#[inline]
pub fn entry_center(index: usize, offset: f32, tuning: &Tuning) -> Vec2 {
    Vec2::new(tuning.menu_width / 2.0, entry_center_y(index, offset, tuning))
}

/// First palette entry (front to back) within the vertical tolerance of `y`.
pub fn hit_test(discovered: &Discovered, offset: f32, y: f32, tuning: &Tuning) -> Option<usize> {
    (0..discovered.len())
        .find(|&i| (y - entry_center_y(i, offset, tuning)).abs() < tuning.menu_hit_tolerance)
}

//! Gesture interpreter: one hand's 21 landmarks in, one [`Pointer`] out.
//!
//! Classification is a pure function of the current frame. Pinch turns on at
//! `pinch_on_dist` but `release` only fires past `release_dist`; anything in
//! between is neither, so a pinching hand hovering around the on-threshold
//! never flickers into a release. Downstream state machines only leave a
//! pinch/grab on `release`, which is where the hysteresis takes effect.

use glam::Vec2;

use crate::constants::{INDEX_TIP, LANDMARKS_PER_HAND, MIDDLE_TIP, THUMB_TIP};
use crate::error::{CraftError, Result};
use crate::geometry::dist;
use crate::tuning::{Tuning, Viewport};

/// Stable identity of a tracked hand (see [`crate::tracking`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandId(pub u32);

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hand#{}", self.0)
    }
}

/// One detected hand in the detector's normalized `[0, 1]` image coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec2; LANDMARKS_PER_HAND],
}

impl HandLandmarks {
    pub fn new(points: &[Vec2]) -> Result<Self> {
        if points.len() != LANDMARKS_PER_HAND {
            return Err(CraftError::LandmarkCount(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CraftError::NonFinite { index });
        }
        let mut out = [Vec2::ZERO; LANDMARKS_PER_HAND];
        out.copy_from_slice(points);
        Ok(Self { points: out })
    }

    /// Build from interleaved `x, y` pairs (42 floats).
    pub fn from_flat(xy: &[f32]) -> Result<Self> {
        if xy.len() != LANDMARKS_PER_HAND * 2 {
            return Err(CraftError::LandmarkCount(xy.len() / 2));
        }
        let points: Vec<Vec2> = xy.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect();
        Self::new(&points)
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Mirror x (the camera view is shown flipped) and scale to pixels.
    pub fn to_screen(&self, viewport: Viewport) -> ScreenHand {
        let mut points = [Vec2::ZERO; LANDMARKS_PER_HAND];
        for (dst, src) in points.iter_mut().zip(self.points.iter()) {
            *dst = Vec2::new((1.0 - src.x) * viewport.width, src.y * viewport.height);
        }
        ScreenHand { points }
    }
}

/// Split a detector's flat buffer (`hands * 21 * 2` floats) into hands.
pub fn hands_from_flat(buf: &[f32]) -> Result<Vec<HandLandmarks>> {
    let stride = LANDMARKS_PER_HAND * 2;
    if buf.len() % stride != 0 {
        return Err(CraftError::RaggedBuffer(buf.len()));
    }
    buf.chunks_exact(stride).map(HandLandmarks::from_flat).collect()
}

/// A hand's landmarks in mirrored pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenHand {
    pub points: [Vec2; LANDMARKS_PER_HAND],
}

impl ScreenHand {
    #[inline]
    pub fn index_tip(&self) -> Vec2 {
        self.points[INDEX_TIP]
    }
    #[inline]
    pub fn thumb_tip(&self) -> Vec2 {
        self.points[THUMB_TIP]
    }
    #[inline]
    pub fn middle_tip(&self) -> Vec2 {
        self.points[MIDDLE_TIP]
    }
}

/// Per-frame gesture reading for one hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub hand: HandId,
    pub pos: Vec2,
    pub pinch: bool,
    pub closed: bool,
    pub release: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureFlags {
    pub pinch: bool,
    pub closed: bool,
    pub release: bool,
}

/// Classify from the two fingertip distances that matter.
pub fn flags_for(thumb_index: f32, thumb_middle: f32, tuning: &Tuning) -> GestureFlags {
    let pinch = thumb_index <= tuning.pinch_on_dist;
    GestureFlags {
        pinch,
        closed: pinch && thumb_middle <= tuning.closed_middle_dist,
        release: thumb_index >= tuning.release_dist,
    }
}

pub fn classify(hand: HandId, screen: &ScreenHand, tuning: &Tuning) -> Pointer {
    let index = screen.index_tip();
    let thumb = screen.thumb_tip();
    let d_index = dist(index, thumb);
    let d_middle = dist(screen.middle_tip(), thumb);
    let flags = flags_for(d_index, d_middle, tuning);
    log::trace!(
        "[gesture] {} tip=({:.0},{:.0}) d_index={:.1} d_middle={:.1} {:?}",
        hand,
        index.x,
        index.y,
        d_index,
        d_middle,
        flags
    );
    Pointer {
        hand,
        pos: index,
        pinch: flags.pinch,
        closed: flags.closed,
        release: flags.release,
    }
}

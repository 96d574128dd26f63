//! Small pure helpers shared by every stage of the frame pipeline.

use glam::Vec2;

#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp that never panics: when `min > max` the lower bound wins.
///
/// `f32::clamp` asserts `min <= max`, which does not hold for a viewport
/// narrower than twice an item radius.
#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.min(max).max(min)
}

/// Order-independent key for a pair of item types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_owned(), b.to_owned())
        } else {
            Self(b.to_owned(), a.to_owned())
        }
    }

    pub fn parts(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }
}

#[inline]
pub fn pair_key(a: &str, b: &str) -> PairKey {
    PairKey::new(a, b)
}

#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// What the frame loop draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Palette, ghosts, items and merging.
    Craft,
    /// Camera and hand skeletons only; the world is not stepped.
    Skeleton,
}

impl ViewMode {
    #[inline]
    pub fn from_fragment(hash: &str) -> Self {
        if hash.eq_ignore_ascii_case(super::constants::SKELETON_FRAGMENT) {
            ViewMode::Skeleton
        } else {
            ViewMode::Craft
        }
    }
}
